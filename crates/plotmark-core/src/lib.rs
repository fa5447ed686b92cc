//! Plotmark Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Plotmark
//! conversion pipeline. It includes:
//!
//! - **Geometry**: Points and bounding boxes in drawing units ([`geometry`] module)
//! - **Artwork**: Layers, paths and the read-only document snapshot ([`artwork`] module)

pub mod artwork;
pub mod geometry;
