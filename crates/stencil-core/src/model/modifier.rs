//! Declaration modifiers.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A modifier keyword on a class, interface, method, field or parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Abstract,
    Default,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
}

impl Modifier {
    /// Returns the keyword as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Abstract => "abstract",
            Self::Default => "default",
            Self::Static => "static",
            Self::Final => "final",
            Self::Transient => "transient",
            Self::Volatile => "volatile",
            Self::Synchronized => "synchronized",
            Self::Native => "native",
            Self::Strictfp => "strictfp",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a modifier keyword.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown modifier `{0}`")]
pub struct UnknownModifier(pub String);

impl FromStr for Modifier {
    type Err = UnknownModifier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let modifier = match s {
            "public" => Self::Public,
            "protected" => Self::Protected,
            "private" => Self::Private,
            "abstract" => Self::Abstract,
            "default" => Self::Default,
            "static" => Self::Static,
            "final" => Self::Final,
            "transient" => Self::Transient,
            "volatile" => Self::Volatile,
            "synchronized" => Self::Synchronized,
            "native" => Self::Native,
            "strictfp" => Self::Strictfp,
            other => return Err(UnknownModifier(other.to_string())),
        };
        Ok(modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifier_round_trips_through_keyword() {
        for modifier in [Modifier::Public, Modifier::Static, Modifier::Final] {
            assert_eq!(modifier.as_str().parse::<Modifier>(), Ok(modifier));
        }
    }

    #[test]
    fn test_unknown_modifier() {
        let err = "publik".parse::<Modifier>().unwrap_err();
        assert_eq!(err.to_string(), "unknown modifier `publik`");
    }
}
