//! Artwork model consumed by the conversion pipeline.
//!
//! A host editor owns the real document; the pipeline only sees a read-only
//! snapshot through the [`ArtworkSource`] trait. [`Document`] is the plain
//! in-memory snapshot used by the command-line tool and by tests.
//!
//! # Overview
//!
//! - [`Path`] - An ordered list of anchor points
//! - [`Layer`] - A visibility flag plus an ordered list of paths
//! - [`LayerRole`] - The fixed roles a layer can play in a cut job
//! - [`ArtworkSource`] - The capability interface the pipeline reads from
//! - [`Document`] - A concrete snapshot keyed by layer name
//!
//! # Example
//!
//! ```
//! # use plotmark_core::artwork::{ArtworkSource, Document, Layer, Path};
//! # use plotmark_core::geometry::Point;
//! let mut doc = Document::new(800.0);
//! doc.insert_layer(
//!     "KissCut",
//!     Layer::new(vec![Path::new(vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0)])]),
//! );
//!
//! assert_eq!(doc.artboard_top(), 800.0);
//! assert_eq!(doc.layer("KissCut").map(|l| l.paths().len()), Some(1));
//! assert!(doc.layer("DieCut").is_none());
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::geometry::Point;

/// An ordered sequence of anchor points.
///
/// Point order defines draw direction. Curve handles are not modelled; a
/// curved segment is treated as the straight line between its anchors.
/// A path may be empty; such paths are skipped by the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the anchor points in draw order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the first anchor, or `None` for an empty path
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A named group of paths with a visibility flag.
///
/// The name lives in the owning [`Document`] map, not on the layer itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Layer {
    #[serde(default = "default_visible")]
    visible: bool,

    #[serde(default)]
    paths: Vec<Path>,
}

fn default_visible() -> bool {
    true
}

impl Layer {
    /// Creates a visible layer holding `paths`
    pub fn new(paths: Vec<Path>) -> Self {
        Self {
            visible: true,
            paths,
        }
    }

    /// Returns this layer with the given visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Iterates every anchor point of every path, in order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.paths.iter().flat_map(|path| path.points().iter().copied())
    }
}

impl Default for Layer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// The role a layer plays in a cut job.
///
/// Only the two cut roles are exported. [`LayerRole::Registration`] holds the
/// printed registration marks, which the plotter locates with its camera and
/// therefore never cuts; it is excluded from bounds as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// Shallow cut through the top material only
    KissCut,
    /// Full-depth cut through every material layer
    DieCut,
    /// Printed registration marks
    Registration,
}

impl LayerRole {
    /// The cut roles, in export order
    pub const CUT_ROLES: [LayerRole; 2] = [LayerRole::KissCut, LayerRole::DieCut];

    /// Returns the layer name a document uses for this role by default
    pub fn default_layer_name(self) -> &'static str {
        match self {
            LayerRole::KissCut => "KissCut",
            LayerRole::DieCut => "DieCut",
            LayerRole::Registration => "Regmark",
        }
    }
}

impl fmt::Display for LayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LayerRole::KissCut => "kiss-cut",
            LayerRole::DieCut => "die-cut",
            LayerRole::Registration => "registration",
        };
        f.write_str(name)
    }
}

/// Read-only view of a host document.
///
/// This is the only surface the pipeline depends on, so any editor or file
/// format can feed it by implementing these two methods.
pub trait ArtworkSource {
    /// Looks up a layer by exact name
    fn layer(&self, name: &str) -> Option<&Layer>;

    /// Returns the Y coordinate of the top edge of the active artboard
    fn artboard_top(&self) -> f64;
}

/// An in-memory document snapshot.
///
/// Layers keep their insertion order. Deserializes from a table of the form
/// `{ artboard_top = 800.0, layers = { KissCut = { paths = [...] } } }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    artboard_top: f64,

    #[serde(default)]
    layers: IndexMap<String, Layer>,
}

impl Document {
    /// Creates an empty document whose artboard top edge sits at `artboard_top`
    pub fn new(artboard_top: f64) -> Self {
        Self {
            artboard_top,
            layers: IndexMap::new(),
        }
    }

    /// Adds or replaces a layer, returning the previous layer of that name
    pub fn insert_layer(&mut self, name: impl Into<String>, layer: Layer) -> Option<Layer> {
        self.layers.insert(name.into(), layer)
    }

    /// Builder-style variant of [`Document::insert_layer`]
    pub fn with_layer(mut self, name: impl Into<String>, layer: Layer) -> Self {
        self.insert_layer(name, layer);
        self
    }

    /// Iterates layers in insertion order
    pub fn layers(&self) -> impl Iterator<Item = (&str, &Layer)> {
        self.layers.iter().map(|(name, layer)| (name.as_str(), layer))
    }
}

impl ArtworkSource for Document {
    fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    fn artboard_top(&self) -> f64 {
        self.artboard_top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(points: &[(f64, f64)]) -> Path {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn test_path_accessors() {
        let p = path(&[(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(p.len(), 2);
        assert!(!p.is_empty());
        assert_eq!(p.first(), Some(Point::new(1.0, 2.0)));

        let empty = Path::default();
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
    }

    #[test]
    fn test_layer_defaults_to_visible() {
        let layer = Layer::default();
        assert!(layer.is_visible());
        assert!(layer.paths().is_empty());

        let hidden = Layer::default().with_visible(false);
        assert!(!hidden.is_visible());
    }

    #[test]
    fn test_layer_points_flatten_in_order() {
        let layer = Layer::new(vec![
            path(&[(0.0, 0.0), (1.0, 1.0)]),
            Path::default(),
            path(&[(2.0, 2.0)]),
        ]);

        let points: Vec<_> = layer.points().collect();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
    }

    #[test]
    fn test_document_lookup_and_order() {
        let doc = Document::new(500.0)
            .with_layer("DieCut", Layer::default())
            .with_layer("KissCut", Layer::default())
            .with_layer("Regmark", Layer::default());

        assert_eq!(doc.artboard_top(), 500.0);
        assert!(doc.layer("KissCut").is_some());
        assert!(doc.layer("kisscut").is_none());

        let names: Vec<_> = doc.layers().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["DieCut", "KissCut", "Regmark"]);
    }

    #[test]
    fn test_insert_layer_replaces() {
        let mut doc = Document::new(0.0);
        assert!(doc.insert_layer("KissCut", Layer::default()).is_none());
        let previous = doc.insert_layer("KissCut", Layer::default().with_visible(false));
        assert_eq!(previous, Some(Layer::default()));
        assert!(!doc.layer("KissCut").unwrap().is_visible());
    }

    #[test]
    fn test_layer_roles() {
        assert_eq!(LayerRole::KissCut.default_layer_name(), "KissCut");
        assert_eq!(LayerRole::DieCut.default_layer_name(), "DieCut");
        assert_eq!(LayerRole::Registration.default_layer_name(), "Regmark");
        assert!(!LayerRole::CUT_ROLES.contains(&LayerRole::Registration));
        assert_eq!(LayerRole::DieCut.to_string(), "die-cut");
    }
}
