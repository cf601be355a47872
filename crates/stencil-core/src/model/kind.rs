//! Stable tags identifying node types.

use std::fmt;

/// A stable tag naming a node type or a capability a node declares.
///
/// Built-in kinds are available as associated constants. Extensions
/// define their own with [`NodeKind::new`]; two kinds are equal exactly
/// when their names are equal, so extension names should be namespaced
/// (`"acme.widget"`) to avoid colliding with another extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKind(&'static str);

impl NodeKind {
    pub const FILE: Self = Self::new("file");
    pub const IMPORT: Self = Self::new("import");
    /// Capability shared by classes and interfaces.
    pub const DECLARATION: Self = Self::new("declaration");
    pub const CLASS: Self = Self::new("class");
    pub const INTERFACE: Self = Self::new("interface");
    pub const METHOD: Self = Self::new("method");
    pub const FIELD: Self = Self::new("field");
    pub const PARAMETER: Self = Self::new("parameter");
    pub const TYPE: Self = Self::new("type");
    pub const GENERIC: Self = Self::new("generic");
    /// Capability shared by simple and composite statements.
    pub const STATEMENT: Self = Self::new("statement");
    pub const SIMPLE_STATEMENT: Self = Self::new("simple_statement");
    pub const COMPOSITE_STATEMENT: Self = Self::new("composite_statement");
    pub const JAVADOC: Self = Self::new("javadoc");
    pub const JAVADOC_TAG: Self = Self::new("javadoc_tag");

    /// Creates a kind with the given name.
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_equality_by_name() {
        assert_eq!(NodeKind::new("statement"), NodeKind::STATEMENT);
        assert_ne!(NodeKind::SIMPLE_STATEMENT, NodeKind::STATEMENT);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::COMPOSITE_STATEMENT.to_string(), "composite_statement");
        assert_eq!(NodeKind::new("acme.widget").name(), "acme.widget");
    }
}
