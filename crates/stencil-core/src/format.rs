//! Formatting primitives shared by renderers.
//!
//! Renderers compose their output from a handful of separators and two
//! structural helpers: indenting a body and wrapping it in a block. The
//! indentation unit and line separator are configurable through
//! [`Formatting`].
//!
//! # Example
//!
//! ```
//! # use stencil_core::{Fragment, format::Formatting};
//! let formatting = Formatting::default();
//! let body = Fragment::present("return id;");
//! assert_eq!(formatting.block(&body), "{\n    return id;\n}");
//! assert_eq!(formatting.block(&Fragment::Absent), "{\n}");
//! ```

use serde::Deserialize;

use crate::fragment::Fragment;

pub const EMPTY: &str = "";
pub const SPACE: &str = " ";
pub const COMMA_SPACE: &str = ", ";
pub const DOT: &str = ".";
pub const SEMICOLON: &str = ";";
pub const NL: &str = "\n";
pub const BLOCK_START: &str = "{";
pub const BLOCK_END: &str = "}";

const DEFAULT_INDENT: &str = "    ";

/// Indents every non-empty line of `text` by `unit`.
///
/// Empty lines stay empty so that generated files carry no trailing
/// whitespace. Lines are rejoined with `newline`.
pub fn indent(text: &str, unit: &str, newline: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{unit}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join(newline)
}

/// Indentation unit and line separator used when rendering.
///
/// Deserializable so it can be loaded as part of an application
/// configuration file. Missing fields fall back to four spaces and `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Formatting {
    /// Text inserted once per nesting level.
    indent: String,

    /// Line separator placed between rendered lines.
    newline: String,
}

impl Default for Formatting {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT.to_string(),
            newline: NL.to_string(),
        }
    }
}

impl Formatting {
    /// Creates a formatting definition with an explicit indent unit and newline.
    pub fn new(indent: impl Into<String>, newline: impl Into<String>) -> Self {
        Self {
            indent: indent.into(),
            newline: newline.into(),
        }
    }

    pub fn indent_unit(&self) -> &str {
        &self.indent
    }

    pub fn newline(&self) -> &str {
        &self.newline
    }

    /// Two line separators: the gap between members and declarations.
    pub fn blank_line(&self) -> String {
        self.newline.repeat(2)
    }

    /// Indents every non-empty line of `text` by one level.
    pub fn indent(&self, text: &str) -> String {
        indent(text, &self.indent, &self.newline)
    }

    /// Wraps a body in braces, indenting it by one level.
    ///
    /// An absent body yields an empty block, with the braces on separate
    /// lines.
    pub fn block(&self, body: &Fragment) -> String {
        let nl = &self.newline;
        match body.as_str() {
            Some(text) => format!("{BLOCK_START}{nl}{}{nl}{BLOCK_END}", self.indent(text)),
            None => format!("{BLOCK_START}{nl}{BLOCK_END}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_empty_lines() {
        let text = "int a;\n\nint b;";
        assert_eq!(indent(text, "  ", "\n"), "  int a;\n\n  int b;");
    }

    #[test]
    fn test_indent_nested_levels() {
        let once = indent("x();", "\t", "\n");
        let twice = indent(&once, "\t", "\n");
        assert_eq!(twice, "\t\tx();");
    }

    #[test]
    fn test_block_with_body() {
        let formatting = Formatting::new("  ", "\n");
        let body = Fragment::present("a();\nb();");
        assert_eq!(formatting.block(&body), "{\n  a();\n  b();\n}");
    }

    #[test]
    fn test_block_without_body() {
        let formatting = Formatting::default();
        assert_eq!(formatting.block(&Fragment::Absent), "{\n}");
    }

    #[test]
    fn test_blank_line_uses_newline() {
        let formatting = Formatting::new("    ", "\r\n");
        assert_eq!(formatting.blank_line(), "\r\n\r\n");
    }

    #[test]
    fn test_defaults() {
        let formatting = Formatting::default();
        assert_eq!(formatting.indent_unit(), "    ");
        assert_eq!(formatting.newline(), "\n");
    }
}
