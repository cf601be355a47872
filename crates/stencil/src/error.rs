//! Error types for Stencil operations.
//!
//! This module provides the main error type [`StencilError`] which wraps
//! the error conditions that can occur while building an engine and
//! rendering models.

use std::io;

use thiserror::Error;

use stencil_core::RenderError;
use stencil_parser::error::ParseError;

use crate::lifecycle::LifecycleError;

/// The main error type for Stencil operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the text that failed to parse next to the
/// structured error, so that callers can point into it when reporting.
#[derive(Debug, Error)]
pub enum StencilError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Lifecycle error: {0}")]
    Lifecycle(#[from] LifecycleError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Model error: {0}")]
    Model(String),
}

impl StencilError {
    /// Create a new `Parse` error with the associated source text.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
