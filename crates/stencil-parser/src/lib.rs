//! # Stencil Parser
//!
//! Parser for the type expressions used to describe types in Stencil
//! model documents, such as `java.util.Map<K, List<? extends V>>[]`.
//!
//! ## Usage
//!
//! ```
//! # use stencil_parser::{parse_type, parse_generic, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let ty = parse_type("java.util.List<String>[]")?;
//!     assert_eq!(ty.simple_name(), "List");
//!     assert_eq!(ty.array_dimension(), 1);
//!
//!     let generic = parse_generic("T extends Comparable<T>")?;
//!     assert_eq!(generic.lower_bound(), Some("T"));
//!     Ok(())
//! }
//! ```
//!
//! Failures are reported as a [`error::ParseError`] holding
//! [`error::Diagnostic`]s with an error code and labeled [`Span`]s into the
//! parsed text.

pub mod error;
mod span;
mod type_expr;

pub use span::Span;

use stencil_core::model::{Generic, Type};

use error::ParseError;

/// Parse a type reference.
///
/// Accepts a qualified name with optional generic arguments and array
/// dimensions. Arguments may be types or wildcards (`?`, `? extends A`,
/// `? super A`). Whitespace between tokens is ignored.
///
/// # Errors
///
/// Returns a [`ParseError`] when the text is empty, malformed, or has
/// input left over after a complete type.
pub fn parse_type(source: &str) -> Result<Type, ParseError> {
    type_expr::parse_type(source)
}

/// Parse a generic parameter or argument.
///
/// A bare name (`T`) or a name with `extends` bounds
/// (`T extends A & B`) becomes a type parameter; anything else is parsed
/// as a type argument or wildcard, as in [`parse_type`].
///
/// # Errors
///
/// Returns a [`ParseError`] under the same conditions as [`parse_type`].
pub fn parse_generic(source: &str) -> Result<Generic, ParseError> {
    type_expr::parse_generic(source)
}
