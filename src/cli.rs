//! Command line interface definition using clap.
//!
//! This module defines the [`Cli`] structure. It is also compiled by
//! `build.rs` to render the manual page, so it depends on nothing beyond
//! `clap` and the standard library.
//!
//! Flags are only recognised before the first filename: `which tool -a`
//! looks up `tool` and `-a`. The single-dash long spellings `-all` and
//! `-verbose` are accepted through [`normalise_args`].

use clap::Parser;
use std::ffi::OsString;

/// Exit status used for every usage error, including explicit help requests.
pub const USAGE_EXIT_CODE: u8 = 2;

/// Single-dash long flags and their canonical spelling.
const SINGLE_DASH_LONGS: &[(&str, &str)] = &[("-all", "--all"), ("-verbose", "--verbose")];

/// which print the pathname of the filename in the current environment.
#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(
    name = "which",
    long_about = None,
    override_usage = "which [options] filename [...]",
    disable_version_flag = true,
    args_override_self = true
)]
pub struct Cli {
    /// Print all pathnames of each matching filename.
    #[arg(short, long)]
    pub all: bool,

    /// Enable verbose diagnostic logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Filenames to search for.
    #[arg(
        value_name = "FILENAME",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub filenames: Vec<OsString>,
}

/// Rewrite single-dash long flags (`-all`) to their `--` form.
///
/// Only arguments before the first non-flag, `-`, or `--` are rewritten;
/// everything after is passed through untouched. The program name is never
/// rewritten.
pub fn normalise_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut normalised: Vec<OsString> = iter.by_ref().take(1).collect();
    let mut in_flags = true;
    for arg in iter {
        if in_flags {
            let is_flag = arg.as_encoded_bytes().starts_with(b"-") && arg != "-";
            if !is_flag || arg == "--" {
                in_flags = false;
            } else if let Some((_, long)) =
                SINGLE_DASH_LONGS.iter().find(|(single, _)| arg == *single)
            {
                normalised.push(OsString::from(*long));
                continue;
            }
        }
        normalised.push(arg);
    }
    normalised
}
