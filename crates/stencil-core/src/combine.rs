//! Absence-aware joining of fragments.
//!
//! Combining child output is where generated code most easily goes wrong:
//! a separator emitted next to a child that rendered nothing leaves a
//! stray comma or blank line behind. The functions in this module drop
//! absent fragments first and place the separator strictly between the
//! remaining present ones.
//!
//! # Overview
//!
//! - [`join`] - Join with a separator; no present input yields [`Fragment::Absent`]
//! - [`join_if_not_empty`] - As [`join`], wrapping a present result in a prefix and suffix
//! - [`try_join`] - As [`join`], over fallible items, stopping at the first error
//! - [`Joiner`] - A reusable separator/prefix/suffix triple
//!
//! # Example
//!
//! ```
//! # use stencil_core::{Fragment, combine};
//! let fragments = [Fragment::present("x"), Fragment::Absent, Fragment::present("y")];
//! assert_eq!(combine::join(fragments, ", "), Fragment::present("x, y"));
//!
//! let generics = [Fragment::present("K"), Fragment::present("V")];
//! assert_eq!(
//!     combine::join_if_not_empty(generics, ", ", "<", ">"),
//!     Fragment::present("<K, V>")
//! );
//!
//! let none: [Fragment; 0] = [];
//! assert!(combine::join_if_not_empty(none, ", ", "<", ">").is_absent());
//! ```

use crate::fragment::Fragment;

/// Joins fragments with `separator` between adjacent present fragments.
///
/// Absent fragments contribute neither text nor a separator. If no
/// fragment is present the result is [`Fragment::Absent`], never an empty
/// present string.
pub fn join<I>(fragments: I, separator: &str) -> Fragment
where
    I: IntoIterator<Item = Fragment>,
{
    let mut joined: Option<String> = None;

    for text in fragments.into_iter().flatten() {
        match joined.as_mut() {
            Some(buffer) => {
                buffer.push_str(separator);
                buffer.push_str(&text);
            }
            None => joined = Some(text),
        }
    }

    joined.into()
}

/// Joins fragments like [`join`] and wraps a present result in `prefix`
/// and `suffix`.
///
/// An empty input, or one where every fragment is absent, yields
/// [`Fragment::Absent`] so that callers never emit `<>` or a bare
/// `throws`.
pub fn join_if_not_empty<I>(fragments: I, separator: &str, prefix: &str, suffix: &str) -> Fragment
where
    I: IntoIterator<Item = Fragment>,
{
    join(fragments, separator).map(|text| format!("{prefix}{text}{suffix}"))
}

/// Joins fallible fragments like [`join`].
///
/// Stops at the first error and returns it; no partially joined text is
/// ever returned alongside an error.
pub fn try_join<I, E>(fragments: I, separator: &str) -> Result<Fragment, E>
where
    I: IntoIterator<Item = Result<Fragment, E>>,
{
    Joiner::new(separator).try_join(fragments)
}

/// A reusable separator with an optional prefix and suffix.
///
/// # Example
///
/// ```
/// # use stencil_core::{Fragment, combine::Joiner};
/// let throws = Joiner::new(", ").with_prefix(" throws ");
/// let types = vec![Fragment::present("IOException"), Fragment::present("SQLException")];
/// assert_eq!(
///     throws.join(types),
///     Fragment::present(" throws IOException, SQLException")
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Joiner<'s> {
    separator: &'s str,
    prefix: &'s str,
    suffix: &'s str,
}

impl<'s> Joiner<'s> {
    /// Creates a joiner with the given separator and no prefix or suffix.
    pub const fn new(separator: &'s str) -> Self {
        Self {
            separator,
            prefix: "",
            suffix: "",
        }
    }

    /// Sets the text placed before a present result.
    pub const fn with_prefix(mut self, prefix: &'s str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Sets the text placed after a present result.
    pub const fn with_suffix(mut self, suffix: &'s str) -> Self {
        self.suffix = suffix;
        self
    }

    /// The text placed between adjacent present fragments.
    pub fn separator(&self) -> &'s str {
        self.separator
    }

    /// Joins infallible fragments.
    pub fn join<I>(&self, fragments: I) -> Fragment
    where
        I: IntoIterator<Item = Fragment>,
    {
        join_if_not_empty(fragments, self.separator, self.prefix, self.suffix)
    }

    /// Joins fallible fragments, stopping at the first error.
    pub fn try_join<I, E>(&self, fragments: I) -> Result<Fragment, E>
    where
        I: IntoIterator<Item = Result<Fragment, E>>,
    {
        let mut present = Vec::new();
        for fragment in fragments {
            if let Fragment::Present(text) = fragment? {
                present.push(Fragment::Present(text));
            }
        }
        Ok(self.join(present))
    }
}
