//! Statements inside method bodies.

use super::NodeKind;

/// A statement in a method body.
///
/// Simple statements carry text that a translator produced up front and
/// that renders verbatim. Composite statements group child statements and
/// render as the plain concatenation of their children, so any newline or
/// semicolon must already be part of the children's text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Simple(String),
    Composite(Vec<Statement>),
}

impl Statement {
    /// Creates a simple statement from pre-rendered text.
    pub fn of(text: impl Into<String>) -> Self {
        Self::Simple(text.into())
    }

    /// Creates a composite statement from its children.
    pub fn composite(children: impl IntoIterator<Item = Statement>) -> Self {
        Self::Composite(children.into_iter().collect())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Simple(_) => NodeKind::SIMPLE_STATEMENT,
            Self::Composite(_) => NodeKind::COMPOSITE_STATEMENT,
        }
    }

    /// Child statements; empty for a simple statement.
    pub fn children(&self) -> &[Statement] {
        match self {
            Self::Simple(_) => &[],
            Self::Composite(children) => children,
        }
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Self::of(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Self::Simple(text)
    }
}

impl FromIterator<Statement> for Statement {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self::composite(iter)
    }
}
