//! Error types for Plotmark operations.
//!
//! The conversion itself cannot fail; [`PlotmarkError`] covers the work
//! around it: reading snapshots and configuration, and writing output.

use std::{io, ops::Range};

use thiserror::Error;

/// The main error type for Plotmark operations.
///
/// # Diagnostic Variants
///
/// The `Document` variant keeps the snapshot source and, when the parser
/// reports one, the byte range of the problem. This is enough for rich
/// error reporting that points at the offending input.
#[derive(Debug, Error)]
pub enum PlotmarkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid document: {message}")]
    Document {
        message: String,
        src: String,
        span: Option<Range<usize>>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

impl PlotmarkError {
    /// Create a new `Document` error with the associated source text.
    pub fn new_document_error(
        message: impl Into<String>,
        src: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Self {
        Self::Document {
            message: message.into(),
            src: src.into(),
            span,
        }
    }
}
