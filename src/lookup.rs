//! Filename resolution across the search paths.
//!
//! [`Locator`] walks every directory in order and, within each directory,
//! every extension in order. The first match ends the search unless
//! [`Options::print_all`] is set, in which case every match is collected.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use mockable::Env;
use tracing::debug;

use crate::{
    candidate::candidate,
    env::{Extensions, SearchPaths},
    options::Options,
    probe::Probe,
};

/// Resolves filenames against fixed search paths.
#[derive(Debug)]
pub struct Locator<'a, E, P> {
    options: Options,
    paths: &'a SearchPaths,
    env: &'a E,
    probe: P,
}

impl<'a, E: Env, P: Probe> Locator<'a, E, P> {
    /// Create a locator searching `paths`, reading extensions from `env` and
    /// testing candidates with `probe`.
    pub const fn new(options: Options, paths: &'a SearchPaths, env: &'a E, probe: P) -> Self {
        Self {
            options,
            paths,
            env,
            probe,
        }
    }

    /// Return the matches for `name` in discovery order.
    ///
    /// The result holds at most one path unless every match was requested.
    /// An empty result means the filename was not found anywhere.
    pub fn locate(&self, name: &OsStr) -> Vec<PathBuf> {
        let extensions = Extensions::resolve(self.env);
        let mut matches = Vec::new();
        for dir in self.paths.iter() {
            let candidates = extensions.iter().map(|ext| candidate(dir, name, ext));
            if push_matches(&mut matches, candidates, &self.probe, self.options.print_all) {
                break;
            }
        }
        debug!(
            name = %Path::new(name).display(),
            found = matches.len(),
            "lookup finished"
        );
        matches
    }
}

/// Append existing `candidates` to `matches`.
///
/// Returns `true` once a match has been recorded and the caller should stop
/// searching.
fn push_matches(
    matches: &mut Vec<PathBuf>,
    candidates: impl IntoIterator<Item = PathBuf>,
    probe: &impl Probe,
    collect_all: bool,
) -> bool {
    for path in candidates {
        if !probe.exists(&path) {
            continue;
        }
        debug!(path = %path.display(), "match");
        matches.push(path);
        if !collect_all {
            return true;
        }
    }
    false
}
