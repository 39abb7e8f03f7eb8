//! Lookup options derived from the command line.

use crate::cli::Cli;

/// Immutable settings consulted by the matcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Report every match instead of stopping at the first one.
    pub print_all: bool,
}

impl Options {
    /// Build options that stop at the first match.
    #[must_use]
    pub const fn first_match() -> Self {
        Self { print_all: false }
    }

    /// Build options that report every match.
    #[must_use]
    pub const fn all_matches() -> Self {
        Self { print_all: true }
    }
}

impl From<&Cli> for Options {
    fn from(cli: &Cli) -> Self {
        Self {
            print_all: cli.all,
        }
    }
}
