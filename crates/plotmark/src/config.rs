//! Configuration types for PLT conversion.
//!
//! This module provides configuration structures that control which layers
//! are read and how many registration markers are requested. All types
//! implement [`serde::Deserialize`] for loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining marker and layer settings.
//! - [`MarkerConfig`] - Marker count along the long axis.
//! - [`LayerConfig`] - Document layer names for each [`LayerRole`].
//!
//! The unit scale and the marker size are fixed by the plotter and are not
//! configurable.
//!
//! # Example
//!
//! ```
//! # use plotmark::config::AppConfig;
//! # use plotmark_core::artwork::LayerRole;
//! let config = AppConfig::default();
//! assert_eq!(config.markers().count().get(), 2);
//! assert_eq!(config.layers().name_for(LayerRole::DieCut), "DieCut");
//! ```

use serde::Deserialize;

use plotmark_core::artwork::LayerRole;

use crate::markers::MarkerCount;

/// Top-level configuration combining marker and layer settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Marker configuration section.
    #[serde(default)]
    markers: MarkerConfig,

    /// Layer naming section.
    #[serde(default)]
    layers: LayerConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified sections.
    ///
    /// # Arguments
    ///
    /// * `markers` - Registration marker settings.
    /// * `layers` - Document layer names for each role.
    pub fn new(markers: MarkerConfig, layers: LayerConfig) -> Self {
        Self { markers, layers }
    }

    /// Returns the marker configuration.
    pub fn markers(&self) -> &MarkerConfig {
        &self.markers
    }

    /// Returns the layer configuration.
    pub fn layers(&self) -> &LayerConfig {
        &self.layers
    }

    /// Returns this configuration with the marker count replaced.
    pub fn with_marker_count(mut self, count: MarkerCount) -> Self {
        self.markers.count = count;
        self
    }
}

/// Registration marker settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkerConfig {
    /// Markers along the long axis; accepts an integer or a string.
    #[serde(default)]
    count: MarkerCount,
}

impl MarkerConfig {
    pub fn new(count: MarkerCount) -> Self {
        Self { count }
    }

    pub fn count(&self) -> MarkerCount {
        self.count
    }
}

/// Names of the document layers that play each [`LayerRole`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    kiss_cut: String,
    die_cut: String,
    registration: String,
}

impl LayerConfig {
    /// Creates a layer configuration from explicit names.
    pub fn new(
        kiss_cut: impl Into<String>,
        die_cut: impl Into<String>,
        registration: impl Into<String>,
    ) -> Self {
        Self {
            kiss_cut: kiss_cut.into(),
            die_cut: die_cut.into(),
            registration: registration.into(),
        }
    }

    /// Returns the layer name that plays `role`.
    pub fn name_for(&self, role: LayerRole) -> &str {
        match role {
            LayerRole::KissCut => &self.kiss_cut,
            LayerRole::DieCut => &self.die_cut,
            LayerRole::Registration => &self.registration,
        }
    }

    /// Returns the names of the cut layers, kiss-cut first.
    pub fn cut_layer_names(&self) -> [&str; 2] {
        LayerRole::CUT_ROLES.map(|role| self.name_for(role))
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        Self::new(
            LayerRole::KissCut.default_layer_name(),
            LayerRole::DieCut.default_layer_name(),
            LayerRole::Registration.default_layer_name(),
        )
    }
}
