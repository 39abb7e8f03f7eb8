//! Candidate path construction.
//!
//! A candidate is a directory joined with a filename, optionally followed by
//! an extension. Joining ignores empty elements and cleans the result
//! lexically, so `/usr/bin/` and `tool` produce `/usr/bin/tool` and an empty
//! directory produces the bare relative filename.

use std::ffi::{OsStr, OsString};
use std::path::{Component, MAIN_SEPARATOR, Path, PathBuf};

/// Build the candidate for `dir`, `name` and `ext`.
///
/// The extension is appended verbatim after cleaning, so `tool` with
/// `.exe` becomes `tool.exe` rather than a new path component.
#[must_use]
pub fn candidate(dir: &Path, name: &OsStr, ext: &str) -> PathBuf {
    let mut raw = join(dir, name).into_os_string();
    raw.push(ext);
    PathBuf::from(raw)
}

/// Join `dir` and `name`, ignoring empty elements.
///
/// Unlike [`Path::join`], an absolute `name` is nested beneath `dir` instead
/// of replacing it. Both elements empty yields the empty path.
#[must_use]
pub fn join(dir: &Path, name: &OsStr) -> PathBuf {
    let dir_empty = dir.as_os_str().is_empty();
    if dir_empty && name.is_empty() {
        return PathBuf::new();
    }
    let mut joined = OsString::from(dir.as_os_str());
    if !dir_empty && !name.is_empty() {
        joined.push(MAIN_SEPARATOR.to_string());
    }
    joined.push(name);
    clean(Path::new(&joined))
}

/// Lexically normalise `path`.
///
/// Repeated separators and `.` components are dropped, and `..` removes the
/// preceding normal component when there is one. A `..` directly beneath the
/// root is discarded. An empty result becomes `.`.
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        PathBuf::from(".")
    } else {
        parts.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[cfg(unix)]
    #[rstest]
    #[case("/usr/bin", "tool", "/usr/bin/tool")]
    #[case("/usr/bin/", "tool", "/usr/bin/tool")]
    #[case("/usr//bin", "./tool", "/usr/bin/tool")]
    #[case("/usr/bin", "../lib/tool", "/usr/lib/tool")]
    #[case("/usr/bin", "/bin/ls", "/usr/bin/bin/ls")]
    #[case("", "tool", "tool")]
    #[case("bin", "", "bin")]
    #[case("", "", "")]
    #[case("/", "..", "/")]
    #[case("..", "tool", "../tool")]
    #[case(".", ".", ".")]
    fn join_cleans_like_a_shell_path(
        #[case] dir: &str,
        #[case] name: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(join(Path::new(dir), OsStr::new(name)), PathBuf::from(expected));
    }

    #[cfg(unix)]
    #[test]
    fn extension_is_appended_after_joining() {
        assert_eq!(
            candidate(Path::new("/opt/tools/"), OsStr::new("run"), ".exe"),
            PathBuf::from("/opt/tools/run.exe")
        );
    }

    #[test]
    fn empty_extension_leaves_candidate_unchanged() {
        let dir = Path::new("bin");
        let name = OsStr::new("run");
        assert_eq!(candidate(dir, name, ""), join(dir, name));
    }

    #[cfg(unix)]
    #[test]
    fn empty_filename_and_directory_take_only_the_extension() {
        assert_eq!(
            candidate(Path::new(""), OsStr::new(""), ".bat"),
            PathBuf::from(".bat")
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_filename_bytes_are_kept() {
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"t\xffool");
        let joined = candidate(Path::new("/bin"), name, ".exe");
        assert_eq!(joined.as_os_str().as_bytes(), b"/bin/t\xffool.exe");
    }
}
