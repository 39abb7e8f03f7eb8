//! Environment-derived search inputs.
//!
//! [`SearchPaths`] lists the directories consulted for every filename and
//! [`Extensions`] lists the suffixes tried within each directory. Both read
//! the process environment through [`mockable::Env`] so tests can supply a
//! `MockEnv` instead of mutating global state.

use std::env::VarError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use mockable::Env;
use tracing::debug;

use crate::error::WhichError;

/// Variable listing the directories searched after the working directory.
pub const PATH_VAR: &str = "PATH";

/// Variable listing the suffixes appended to each candidate.
pub const PATHEXT_VAR: &str = "PATHEXT";

/// Logical working directory maintained by the shell.
pub const PWD_VAR: &str = "PWD";

/// Ordered directories searched for each filename, working directory first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchPaths {
    dirs: Vec<PathBuf>,
}

impl SearchPaths {
    /// Capture the working directory and `PATH` from the running process.
    ///
    /// # Errors
    ///
    /// Returns [`WhichError::CurrentDir`] when the working directory cannot
    /// be determined, for example because it has been deleted.
    pub fn capture(env: &impl Env) -> Result<Self, WhichError> {
        let cwd = working_dir(env)?;
        Ok(Self::from_parts(cwd, raw_var(env, PATH_VAR)))
    }

    /// Build search paths from an explicit working directory and raw `PATH`.
    ///
    /// An unset or empty `PATH` contributes no entries. Otherwise every
    /// entry is kept, including empty ones produced by adjacent separators.
    #[must_use]
    pub fn from_parts(cwd: PathBuf, raw_path: Option<OsString>) -> Self {
        let mut dirs = vec![cwd];
        if let Some(raw) = raw_path.filter(|value| !value.is_empty()) {
            dirs.extend(std::env::split_paths(&raw));
        }
        debug!(count = dirs.len(), "built search paths");
        Self { dirs }
    }

    /// Iterate the directories in search order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.dirs.iter().map(PathBuf::as_path)
    }

    /// Number of directories, the working directory included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Always `false`: the working directory is present in every instance.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }
}

/// Ordered suffixes tried for each directory, bare name first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extensions {
    suffixes: Vec<String>,
}

impl Extensions {
    /// Read `PATHEXT` from `env` and derive the suffix list.
    #[must_use]
    pub fn resolve(env: &impl Env) -> Self {
        let raw = raw_var(env, PATHEXT_VAR)
            .map(|value| value.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_raw(&raw)
    }

    /// Derive the suffix list from a raw `PATHEXT` value.
    ///
    /// The value is lowercased and split on `;`. Empty segments are kept, so
    /// an empty value yields two bare-name entries.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        let suffixes = std::iter::once(String::new())
            .chain(lowered.split(';').map(str::to_owned))
            .collect();
        Self { suffixes }
    }

    /// Iterate the suffixes in trial order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.suffixes.iter().map(String::as_str)
    }
}

/// Resolve the working directory, preferring `PWD` when it names the same
/// directory as `.` so paths reached through a symlink keep their spelling.
fn working_dir(env: &impl Env) -> Result<PathBuf, WhichError> {
    let logical = raw_var(env, PWD_VAR)
        .map(PathBuf::from)
        .filter(|pwd| pwd.is_absolute() && same_directory(pwd, Path::new(".")));
    logical.map_or_else(
        || std::env::current_dir().map_err(|source| WhichError::CurrentDir { source }),
        Ok,
    )
}

#[cfg(unix)]
fn same_directory(left: &Path, right: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (std::fs::metadata(left), std::fs::metadata(right)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
const fn same_directory(_left: &Path, _right: &Path) -> bool {
    false
}

fn raw_var(env: &impl Env, key: &str) -> Option<OsString> {
    match env.raw(key) {
        Ok(value) => Some(OsString::from(value)),
        Err(VarError::NotUnicode(value)) => Some(value),
        Err(VarError::NotPresent) => None,
    }
}
