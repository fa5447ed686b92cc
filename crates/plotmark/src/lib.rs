//! Plotmark - Convert layered vector artwork into PLT cut files.
//!
//! Artwork is read from two cut layers (kiss-cut and die-cut), measured to
//! place OPOS registration markers, transformed from drawing points into
//! plotter device units, and serialized into the PLT command dialect used by
//! contour-cutting plotters.
//!
//! The pipeline runs in four stages, each usable on its own:
//!
//! 1. [`extract::compute_bounds`] - artwork bounds over the cut layers
//! 2. [`transform::TransformContext`] - drawing points to device units
//! 3. [`markers::compute_markers`] - marker distances from the bounds
//! 4. [`export::plt`] - per-layer commands and the final document

pub mod config;
pub mod export;
pub mod extract;
pub mod markers;
pub mod transform;

mod error;

pub use plotmark_core::{artwork, geometry};

pub use error::PlotmarkError;
pub use export::plt::PltDocument;

use log::{debug, info};

use plotmark_core::{
    artwork::{ArtworkSource, LayerRole},
    geometry::Bounds,
};

use config::AppConfig;
use export::plt::{Command, PenUpStyle};
use markers::{MarkerSpec, compute_markers};
use transform::{POINTS_TO_DEVICE, TransformContext};

/// Builder for converting artwork snapshots into PLT documents.
///
/// # Examples
///
/// ```rust
/// use plotmark::{
///     PltBuilder,
///     artwork::{Document, Layer, Path},
///     config::AppConfig,
///     geometry::Point,
/// };
///
/// let doc = Document::new(800.0).with_layer(
///     "KissCut",
///     Layer::new(vec![Path::new(vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0)])]),
/// );
///
/// let builder = PltBuilder::new(AppConfig::default());
/// let plt = builder.convert(&doc);
///
/// assert_eq!(plt.lines().last().map(String::as_str), Some("e@"));
/// ```
#[derive(Debug, Default)]
pub struct PltBuilder {
    config: AppConfig,
}

impl PltBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Marker count and layer naming settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used by this builder.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Computes the artwork bounds over the configured cut layers.
    pub fn bounds<S: ArtworkSource + ?Sized>(&self, source: &S) -> Bounds {
        let layers = self.config.layers();
        let registration = layers.name_for(LayerRole::Registration);
        if source.layer(registration).is_some() {
            debug!(layer = registration; "Registration layer present, excluded from bounds");
        }
        extract::compute_bounds(source, &layers.cut_layer_names())
    }

    /// Computes the marker layout for `source`.
    pub fn markers<S: ArtworkSource + ?Sized>(&self, source: &S) -> MarkerSpec {
        compute_markers(
            self.bounds(source),
            self.config.markers().count(),
            POINTS_TO_DEVICE,
        )
    }

    /// Converts a document snapshot into a complete PLT document.
    ///
    /// This is a pure function of the snapshot and the configuration:
    /// identical inputs always produce identical output.
    pub fn convert<S: ArtworkSource + ?Sized>(&self, source: &S) -> PltDocument {
        info!("Converting artwork to PLT");

        let markers = self.markers(source);
        info!(
            x_distance = markers.distance_long(),
            y_distance = markers.distance_short(),
            count = markers.count().get();
            "Marker layout computed"
        );

        let context = TransformContext::for_artboard(source.artboard_top());
        debug!(artboard_top = source.artboard_top(); "Device origin anchored to artboard");

        let kiss_cut = self.serialize_role(source, &context, LayerRole::KissCut);
        let die_cut = self.serialize_role(source, &context, LayerRole::DieCut);

        let doc = export::plt::assemble(&markers, &kiss_cut, &die_cut);
        info!(lines = doc.len(); "PLT document generated");
        doc
    }

    fn serialize_role<S: ArtworkSource + ?Sized>(
        &self,
        source: &S,
        context: &TransformContext,
        role: LayerRole,
    ) -> Vec<Command> {
        let name = self.config.layers().name_for(role);
        match source.layer(name) {
            Some(layer) => {
                let commands =
                    export::plt::serialize_layer(layer, context, PenUpStyle::for_role(role));
                debug!(layer = name, role:% = role, paths = commands.len() / 2; "Layer exported");
                commands
            }
            None => {
                debug!(layer = name, role:% = role; "Layer not found, nothing to export");
                Vec::new()
            }
        }
    }
}
