//! Labeled spans attached to diagnostics.

use crate::span::Span;

/// A message attached to a span of the parsed expression.
///
/// A diagnostic normally carries one primary label marking where parsing
/// stopped, and may carry secondary labels pointing at related input such
/// as the `<` an unclosed argument list started at.
///
/// ```text
/// error[E101]: expected `>`
///   |
/// 1 | Map<K, List<V>
///   |    -          ^ generic argument list is not closed
///   |    |
///   |    opened here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a label marking the main location of a diagnostic.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a label giving additional context.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
