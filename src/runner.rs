//! CLI execution.
//!
//! This module keeps `main` minimal: it builds the search inputs, resolves
//! each filename in order, writes matches, and folds the exit status.

use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use mockable::Env;
use tracing::debug;

use crate::{
    cli::Cli,
    env::SearchPaths,
    error::WhichError,
    lookup::Locator,
    options::Options,
    outcome::Outcome,
    probe::{FsProbe, Probe},
};

/// Execute a parsed [`Cli`] against the real filesystem.
///
/// # Errors
///
/// Returns an error when the working directory cannot be resolved or a
/// match cannot be written to `out`.
pub fn run(cli: &Cli, env: &impl Env, out: &mut impl Write) -> Result<Outcome> {
    let paths = SearchPaths::capture(env).context("build search paths")?;
    run_with(cli, &paths, env, FsProbe, out)
}

/// Execute a parsed [`Cli`] with explicit search paths and probe.
///
/// Every filename is looked up even after an earlier one misses.
///
/// # Errors
///
/// Returns an error when a match cannot be written to `out`.
pub fn run_with(
    cli: &Cli,
    paths: &SearchPaths,
    env: &impl Env,
    probe: impl Probe,
    out: &mut impl Write,
) -> Result<Outcome> {
    let locator = Locator::new(Options::from(cli), paths, env, probe);
    let mut outcome = Outcome::default();
    for name in &cli.filenames {
        let matches = locator.locate(name);
        for path in &matches {
            write_match(out, path).map_err(|source| WhichError::Output {
                path: path.display().to_string(),
                source,
            })?;
        }
        outcome = outcome.merge(Outcome::from_match_count(matches.len()));
    }
    out.flush().context("flush standard output")?;
    debug!(?outcome, files = cli.filenames.len(), "run finished");
    Ok(outcome)
}

/// Write `path` followed by a newline, preserving its raw bytes.
fn write_match(out: &mut impl Write, path: &Path) -> io::Result<()> {
    out.write_all(path.as_os_str().as_encoded_bytes())?;
    out.write_all(b"\n")
}
