//! Application entry point.
//!
//! Parses command-line arguments and delegates execution to [`runner::run`].

use clap::{CommandFactory, Parser, error::ErrorKind};
use mockable::DefaultEnv;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;
use which::{
    cli::{Cli, USAGE_EXIT_CODE, normalise_args},
    runner,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(normalise_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => return usage(&err),
    };
    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt().with_max_level(max_level).with_writer(io::stderr).init();
    let env = DefaultEnv::new();
    match runner::run(&cli, &env, &mut io::stdout().lock()) {
        Ok(outcome) => outcome.into(),
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, "which failed");
            ExitCode::FAILURE
        }
    }
}

/// Write clap's rendered error to stderr, followed by the full help unless
/// the help itself was requested.
fn usage(err: &clap::Error) -> ExitCode {
    let mut text = err.render().to_string();
    if err.kind() != ErrorKind::DisplayHelp {
        text.push('\n');
        text.push_str(&Cli::command().render_help().to_string());
    }
    // Nothing useful remains to report if stderr itself is closed.
    drop(io::stderr().lock().write_all(text.as_bytes()));
    ExitCode::from(USAGE_EXIT_CODE)
}
