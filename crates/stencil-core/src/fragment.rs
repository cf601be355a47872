//! Possibly-absent rendered text.
//!
//! A renderer either produces text for a node or produces nothing at all.
//! "Nothing" is not the same as an empty string: an empty composite
//! statement or a generic list without entries must not contribute a
//! separator, a blank line or dangling punctuation when a parent combines
//! it with its siblings. [`Fragment`] keeps the two states explicit.
//!
//! # Example
//!
//! ```
//! # use stencil_core::Fragment;
//! let present = Fragment::present("a();");
//! assert!(present.is_present());
//! assert_eq!(present.as_str(), Some("a();"));
//!
//! let absent = Fragment::Absent;
//! assert!(absent.is_absent());
//! assert_eq!(absent.text_or_empty(), "");
//! ```

use std::fmt;

/// The result of rendering a single model node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Rendered text, possibly the empty string.
    Present(String),
    /// The node contributes nothing to its parent's output.
    #[default]
    Absent,
}

impl Fragment {
    /// Creates a present fragment from any string-like value.
    pub fn present(text: impl Into<String>) -> Self {
        Self::Present(text.into())
    }

    /// Returns `true` if this fragment carries text.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if this fragment carries no text.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the text, if present.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Present(text) => Some(text),
            Self::Absent => None,
        }
    }

    /// Converts into the equivalent [`Option`].
    pub fn into_option(self) -> Option<String> {
        self.into()
    }

    /// Returns the text, or the empty string when absent.
    ///
    /// Use this only at the outermost level, where absence no longer needs
    /// to be distinguished from emptiness.
    pub fn text_or_empty(self) -> String {
        self.into_option().unwrap_or_default()
    }

    /// Transforms present text, leaving an absent fragment untouched.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Self::Present(text) => Self::Present(f(text)),
            Self::Absent => Self::Absent,
        }
    }

    /// Returns `self` if present, otherwise the fragment produced by `f`.
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Present(_) => self,
            Self::Absent => f(),
        }
    }

    /// Iterates over the text, yielding it once if present.
    pub fn iter(&self) -> std::option::IntoIter<&str> {
        self.as_str().into_iter()
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::Present(text)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::Present(text.to_string())
    }
}

impl From<Option<String>> for Fragment {
    fn from(text: Option<String>) -> Self {
        match text {
            Some(text) => Self::Present(text),
            None => Self::Absent,
        }
    }
}

impl From<Fragment> for Option<String> {
    fn from(fragment: Fragment) -> Self {
        match fragment {
            Fragment::Present(text) => Some(text),
            Fragment::Absent => None,
        }
    }
}

impl IntoIterator for Fragment {
    type Item = String;
    type IntoIter = std::option::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(text) => f.write_str(text),
            Self::Absent => Ok(()),
        }
    }
}
