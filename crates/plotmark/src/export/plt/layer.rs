//! Per-layer path serialization.

use log::{debug, trace};

use plotmark_core::artwork::Layer;

use super::command::{Command, PenUpStyle};
use crate::transform::TransformContext;

/// Converts a layer's paths into pen-up/pen-down command pairs.
///
/// Hidden layers produce nothing. Empty paths are skipped. Every other path
/// yields exactly two commands, in input order: a pen-up move to the first
/// anchor and a pen-down cut through all anchors, the first one included.
pub fn serialize_layer(
    layer: &Layer,
    context: &TransformContext,
    style: PenUpStyle,
) -> Vec<Command> {
    if !layer.is_visible() {
        debug!("Layer hidden, skipping export");
        return Vec::new();
    }

    let mut commands = Vec::with_capacity(layer.paths().len() * 2);
    for (index, path) in layer.paths().iter().enumerate() {
        let Some(first) = path.first() else {
            debug!(path_index = index; "Skipping empty path");
            continue;
        };

        commands.push(Command::PenUp {
            at: context.to_device(first),
            style,
        });
        commands.push(Command::PenDown(
            path.points()
                .iter()
                .map(|&point| context.to_device(point))
                .collect(),
        ));
    }

    trace!(commands = commands.len(); "Layer serialized");
    commands
}
