//! CLI logic for the Plotmark PLT exporter.
//!
//! This module reads an artwork snapshot, converts it with the configured
//! marker and layer settings, and writes the resulting cut file.

pub mod document;
pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs::File, io::BufWriter};

use log::info;

use plotmark::{PlotmarkError, PltBuilder, markers::MarkerCount};

/// Run the Plotmark CLI application
///
/// This function processes the input snapshot through the conversion
/// pipeline and writes the resulting PLT file to the output path.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PlotmarkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Snapshot parsing errors
/// - Output write errors
pub fn run(args: &Args) -> Result<(), PlotmarkError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing artwork"
    );

    // Load configuration
    let mut app_config = config::load_config(args.config.as_ref())?;

    if let Some(markers) = &args.markers {
        app_config = app_config.with_marker_count(MarkerCount::parse_lenient(markers));
    }

    // Read input snapshot
    let doc = document::load_document(&args.input)?;

    // Convert
    let builder = PltBuilder::new(app_config);
    let plt = builder.convert(&doc);

    // Write output file
    let file = File::create(&args.output)?;
    plt.write_to(BufWriter::new(file))?;

    info!(output_file = args.output, lines = plt.len(); "PLT exported successfully");

    Ok(())
}
