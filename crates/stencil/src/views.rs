//! Built-in view sets, one per output dialect.
//!
//! A dialect is installed into a [`Registry`] by its [`Installer`]; the
//! engine picks the installer named by the configured dialect.

pub mod java;

use crate::registry::Registry;

/// Registers every view of one dialect.
pub type Installer = fn(&mut Registry);

const DIALECTS: &[(&str, Installer)] = &[(java::DIALECT, java::install)];

/// The installer for `dialect`, if it is built in.
pub fn installer(dialect: &str) -> Option<Installer> {
    DIALECTS
        .iter()
        .find(|(name, _)| *name == dialect)
        .map(|(_, install)| *install)
}

/// Names of the built-in dialects.
pub fn dialects() -> impl Iterator<Item = &'static str> {
    DIALECTS.iter().map(|(name, _)| *name)
}
