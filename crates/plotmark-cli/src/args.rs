//! Command-line argument definitions for the Plotmark CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the marker count, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Plotmark PLT exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input artwork snapshot (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output PLT file
    #[arg(short, long, default_value = "out.plt")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of markers along the long axis (minimum 2); overrides the config
    #[arg(short, long)]
    pub markers: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
