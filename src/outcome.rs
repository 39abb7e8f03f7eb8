//! Overall result of a run, folded across filenames.

use std::process::ExitCode;

/// Whether every filename produced at least one match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Every filename matched, or no filenames were given.
    #[default]
    AllFound,
    /// At least one filename matched nothing.
    SomeMissing,
}

impl Outcome {
    /// Outcome of a single lookup that produced `matches` paths.
    #[must_use]
    pub const fn from_match_count(matches: usize) -> Self {
        if matches == 0 {
            Self::SomeMissing
        } else {
            Self::AllFound
        }
    }

    /// Combine two outcomes; any miss makes the whole run a miss.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::AllFound, Self::AllFound) => Self::AllFound,
            _ => Self::SomeMissing,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::AllFound => Self::SUCCESS,
            Outcome::SomeMissing => Self::from(1),
        }
    }
}
