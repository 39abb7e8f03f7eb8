//! Error types raised while resolving filenames.

use std::io;
use thiserror::Error;

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum WhichError {
    /// The working directory could not be determined, so no search path can
    /// be built.
    #[error("failed to resolve current directory")]
    CurrentDir {
        /// Underlying `getcwd` failure.
        source: io::Error,
    },

    /// A match could not be written to standard output.
    #[error("failed to write '{path}' to standard output")]
    Output {
        /// Display form of the match being written.
        path: String,
        /// Underlying write failure.
        source: io::Error,
    },
}
