//! CLI logic for the Stencil code generator.
//!
//! Reads a model document, renders every file it describes with the
//! configured dialect, and writes the results below an output directory.

pub mod error_adapter;

mod args;
mod config;
mod document;
mod writer;

pub use args::Args;

use std::{fs, io::Write};

use log::info;

use stencil::{Engine, StencilError};

use writer::FileWriter;

/// Run the Stencil CLI application
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `StencilError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Invalid model documents and type expressions
/// - Engine lifecycle and rendering errors
pub fn run(args: &Args) -> Result<(), StencilError> {
    info!(
        input_path = args.input,
        output_dir = args.output;
        "Generating sources"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let files = document::parse_document(&source)?;

    let engine = Engine::new(app_config)?;
    let rendered = files
        .into_iter()
        .map(|file| engine.render_meta(file))
        .collect::<Result<Vec<_>, _>>()?;

    if args.dry_run {
        let mut stdout = std::io::stdout().lock();
        for meta in &rendered {
            writeln!(stdout, "// {}", meta.path())?;
            write!(stdout, "{}", meta.result())?;
        }
        info!(files = rendered.len(); "Dry run finished, nothing written");
    } else {
        let summary = FileWriter::new(&args.output, args.overwrite).write_all(&rendered)?;
        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len();
            "Sources generated"
        );
    }

    engine.stop()
}
