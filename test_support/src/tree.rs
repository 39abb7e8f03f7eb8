//! Temporary directory trees for lookup tests.
//!
//! A [`SearchTree`] owns a temporary root containing a `cwd` directory (the
//! working directory of the process under test) and any number of named
//! directories that can be joined into a `PATH` value.
//!
//! # Examples
//!
//! ```rust
//! use test_support::SearchTree;
//!
//! let tree = SearchTree::new().expect("tree");
//! let bin = tree.dir("bin").expect("bin dir");
//! tree.touch(&bin, "tool").expect("tool");
//! let path = tree.path_var(&[&bin]).expect("PATH");
//! assert!(!path.is_empty());
//! ```

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use std::ffi::OsString;
use std::fs;
use tempfile::TempDir;

/// Temporary directory tree removed on drop.
#[derive(Debug)]
pub struct SearchTree {
    root: Utf8PathBuf,
    cwd: Utf8PathBuf,
    _tempdir: TempDir,
}

impl SearchTree {
    /// Create an empty tree with a `cwd` directory.
    ///
    /// # Errors
    ///
    /// Fails when the temporary directory cannot be created or is not UTF-8.
    pub fn new() -> Result<Self> {
        let tempdir = TempDir::new().context("create tempdir")?;
        let root = Utf8PathBuf::from_path_buf(tempdir.path().to_path_buf())
            .map_err(|path| anyhow!("utf8 path required, got {}", path.display()))?;
        let cwd = root.join("cwd");
        fs::create_dir(&cwd).context("create cwd")?;
        Ok(Self {
            root,
            cwd,
            _tempdir: tempdir,
        })
    }

    /// Root of the tree.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Directory to run the process under test in.
    pub fn cwd(&self) -> &Utf8Path {
        &self.cwd
    }

    /// Create (or reuse) the directory `name` beneath the root.
    ///
    /// # Errors
    ///
    /// Fails when the directory cannot be created.
    pub fn dir(&self, name: &str) -> Result<Utf8PathBuf> {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;
        Ok(dir)
    }

    /// Write an empty file `name` inside `dir`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn touch(&self, dir: &Utf8Path, name: &str) -> Result<Utf8PathBuf> {
        let path = dir.join(name);
        fs::write(&path, b"").with_context(|| format!("write {path}"))?;
        Ok(path)
    }

    /// Join `dirs` with the platform list separator.
    ///
    /// # Errors
    ///
    /// Fails when a directory contains the list separator.
    pub fn path_var(&self, dirs: &[&Utf8Path]) -> Result<OsString> {
        std::env::join_paths(dirs.iter().map(|dir| dir.as_std_path())).context("join PATH")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn touch_creates_file_inside_directory() -> Result<()> {
        let tree = SearchTree::new()?;
        let bin = tree.dir("bin")?;
        let tool = tree.touch(&bin, "tool")?;
        anyhow::ensure!(tool.is_file(), "{tool} should exist");
        anyhow::ensure!(tool.starts_with(tree.root()), "tool should live under the root");
        anyhow::ensure!(tree.cwd().is_dir(), "cwd should exist");
        Ok(())
    }

    #[rstest]
    fn path_var_preserves_order() -> Result<()> {
        let tree = SearchTree::new()?;
        let first = tree.dir("a")?;
        let second = tree.dir("b")?;
        let joined = tree.path_var(&[&first, &second])?;
        let split: Vec<_> = std::env::split_paths(&joined).collect();
        anyhow::ensure!(
            split == vec![first.into_std_path_buf(), second.into_std_path_buf()],
            "unexpected PATH order: {split:?}"
        );
        Ok(())
    }
}
