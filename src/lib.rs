//! Locate files by name in the working directory and `PATH`.
//!
//! The library exposes the pieces the `which` binary composes: the clap
//! [`cli::Cli`] definition, search path and extension resolution in
//! [`env`], existence probing in [`probe`], and the per-filename search in
//! [`lookup`]. [`runner::run`] ties them together.

pub mod candidate;
pub mod cli;
pub mod env;
pub mod error;
pub mod lookup;
pub mod options;
pub mod outcome;
pub mod probe;
pub mod runner;
