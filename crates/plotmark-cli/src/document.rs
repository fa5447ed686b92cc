//! Loading artwork snapshots from TOML files.
//!
//! A snapshot names the artboard's top edge and lists layers by name, each
//! with an optional `visible` flag and a list of paths given as `[x, y]`
//! anchor pairs in points:
//!
//! ```toml
//! artboard_top = 800.0
//!
//! [layers.KissCut]
//! paths = [[[0, 0], [100, 50]]]
//!
//! [layers.DieCut]
//! visible = false
//! paths = []
//! ```

use std::{fs, path::Path};

use log::{debug, info};

use plotmark::{
    PlotmarkError,
    artwork::{ArtworkSource, Document},
};

/// Reads and parses the snapshot at `path`.
///
/// # Errors
///
/// Returns [`PlotmarkError::Io`] if the file cannot be read and
/// [`PlotmarkError::Document`] if its content is not a valid snapshot.
pub fn load_document(path: impl AsRef<Path>) -> Result<Document, PlotmarkError> {
    let path = path.as_ref();
    info!(path = path.display().to_string(); "Reading artwork snapshot");

    let source = fs::read_to_string(path)?;
    parse_document(&source)
}

/// Parses a snapshot from TOML text.
///
/// # Errors
///
/// Returns [`PlotmarkError::Document`] carrying the source text and, where
/// the parser can tell, the byte range of the problem.
pub fn parse_document(source: &str) -> Result<Document, PlotmarkError> {
    let document: Document = toml::from_str(source)
        .map_err(|err| PlotmarkError::new_document_error(err.message(), source, err.span()))?;

    if !document.artboard_top().is_finite() {
        return Err(PlotmarkError::new_document_error(
            "`artboard_top` must be a finite number",
            source,
            None,
        ));
    }

    for (name, layer) in document.layers() {
        if layer.points().any(|p| !p.x().is_finite() || !p.y().is_finite()) {
            return Err(PlotmarkError::new_document_error(
                format!("layer `{name}` contains a non-finite coordinate"),
                source,
                None,
            ));
        }
        debug!(layer = name, paths = layer.paths().len(), visible = layer.is_visible(); "Layer loaded");
    }

    Ok(document)
}
