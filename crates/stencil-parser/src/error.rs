//! Error and diagnostic system for the Stencil type expression parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the parsed expression
//! - Severity levels
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source
//! locations, and help text. Diagnostics are wrapped in [`ParseError`]
//! for returning from the parse functions.
//!
//! # Example
//!
//! ```
//! # use stencil_parser::error::{Diagnostic, ErrorCode};
//! # use stencil_parser::Span;
//!
//! let diag = Diagnostic::error("expected `>`")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(11..11), "generic argument list is not closed")
//!     .with_secondary_label(Span::new(4..5), "opened here")
//!     .with_help("add a closing `>`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
