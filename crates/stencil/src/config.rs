//! Configuration types for Stencil rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources; every section is optional and falls back to its
//! default.
//!
//! # Example
//!
//! ```
//! # use stencil::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.dialect(), "java");
//! assert_eq!(config.formatting().indent_unit(), "    ");
//! ```

use serde::Deserialize;

use stencil_core::format::Formatting;

const DEFAULT_DIALECT: &str = "java";

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Name of the output dialect whose views are installed.
    #[serde(default = "default_dialect")]
    dialect: String,

    /// Formatting section.
    #[serde(default)]
    formatting: Formatting,
}

fn default_dialect() -> String {
    DEFAULT_DIALECT.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            formatting: Formatting::default(),
        }
    }
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given dialect and formatting.
    ///
    /// # Arguments
    ///
    /// * `dialect` - Name of the output dialect, such as `"java"`.
    /// * `formatting` - Indentation and line separator settings.
    pub fn new(dialect: impl Into<String>, formatting: Formatting) -> Self {
        Self {
            dialect: dialect.into(),
            formatting,
        }
    }

    /// Returns the dialect name.
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Returns the formatting configuration.
    pub fn formatting(&self) -> &Formatting {
        &self.formatting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.dialect(), "java");
        assert_eq!(config.formatting(), &Formatting::default());
    }

    #[test]
    fn test_partial_formatting_section() {
        let config: AppConfig = toml::from_str(
            r#"
            [formatting]
            indent = "  "
            "#,
        )
        .unwrap();

        assert_eq!(config.formatting().indent_unit(), "  ");
        assert_eq!(config.formatting().newline(), "\n");
    }
}
