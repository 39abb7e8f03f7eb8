//! Existence checks for candidate paths.
//!
//! A candidate counts as present unless the filesystem reports that it is
//! specifically not found. Any other failure, such as a permission error on
//! a parent directory or a parent that is a regular file, is reported as a
//! match.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use tracing::debug;

/// Decides whether a candidate path exists.
#[cfg_attr(test, mockall::automock)]
pub trait Probe {
    /// Return `true` when `candidate` should be reported as a match.
    fn exists(&self, candidate: &Path) -> bool;
}

/// [`Probe`] backed by `stat`, following symbolic links.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn exists(&self, candidate: &Path) -> bool {
        presence(candidate, fs::metadata(candidate).map(drop))
    }
}

/// Interpret the result of a `stat` call for `candidate`.
pub(crate) fn presence(candidate: &Path, result: io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) if err.kind() == ErrorKind::NotFound => false,
        Err(err) => {
            debug!(
                candidate = %candidate.display(),
                error = %err,
                "stat failed for a reason other than absence; treating as present"
            );
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, Result, ensure};
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    #[rstest]
    #[case(ErrorKind::NotFound, false)]
    #[case(ErrorKind::PermissionDenied, true)]
    #[case(ErrorKind::NotADirectory, true)]
    #[case(ErrorKind::Other, true)]
    fn only_not_found_means_absent(#[case] kind: ErrorKind, #[case] expected: bool) {
        let err = io::Error::from(kind);
        assert_eq!(presence(Path::new("candidate"), Err(err)), expected);
    }

    #[test]
    fn files_and_directories_both_exist() -> Result<()> {
        let temp = TempDir::new().context("create temp dir")?;
        let file = temp.path().join("tool");
        fs::write(&file, b"").context("write tool")?;
        ensure!(FsProbe.exists(&file), "regular file should exist");
        ensure!(FsProbe.exists(temp.path()), "directory should exist");
        ensure!(
            !FsProbe.exists(&temp.path().join("missing")),
            "missing entry should not exist"
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn child_of_regular_file_is_reported_present() -> Result<()> {
        let temp = TempDir::new().context("create temp dir")?;
        let file = temp.path().join("tool");
        fs::write(&file, b"").context("write tool")?;
        ensure!(
            FsProbe.exists(&file.join("nested")),
            "ENOTDIR should be treated as present"
        );
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_absent() -> Result<()> {
        let temp = TempDir::new().context("create temp dir")?;
        let link = temp.path().join("link");
        std::os::unix::fs::symlink(temp.path().join("gone"), &link).context("symlink")?;
        ensure!(!FsProbe.exists(&link), "dangling symlink should be absent");
        Ok(())
    }
}
