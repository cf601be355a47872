//! Command-line argument definitions for the Stencil CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the model document, where generated
//! files go, and how existing files are treated.

use clap::Parser;

/// Command-line arguments for the Stencil code generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input model document (TOML)
    #[arg(help = "Path to the model document")]
    pub input: String,

    /// Directory generated files are written to
    #[arg(short, long, default_value = "generated")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Replace files that already exist in the output directory
    #[arg(long)]
    pub overwrite: bool,

    /// Print generated files to stdout instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
