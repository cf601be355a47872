//! Error codes for the Stencil diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Input errors
//! - `E1xx` - Syntax errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Input Errors (E0xx)
    // =========================================================================
    /// Empty input.
    ///
    /// The expression was empty or contained only whitespace.
    E001,

    /// Unexpected character.
    ///
    /// A character was encountered that cannot start or continue a type
    /// expression.
    E002,

    // =========================================================================
    // Syntax Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered input it did not expect at this position.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before a complete expression was parsed, as in an
    /// unclosed `<`.
    E101,

    /// Trailing input.
    ///
    /// A complete expression was parsed but input remained after it.
    E102,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "empty input",
            ErrorCode::E002 => "unexpected character",
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            ErrorCode::E102 => "trailing input",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E001.description(), "empty input");
        assert_eq!(ErrorCode::E101.description(), "incomplete input");
    }
}
