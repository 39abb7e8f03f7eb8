//! Build script rendering the `which` manual page from `src/cli.rs`.

use clap::CommandFactory;
use clap_mangen::Man;
use std::{fs, path::PathBuf};

#[path = "src/cli.rs"]
#[expect(
    dead_code,
    reason = "Only type definitions are needed for man page generation"
)]
mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Regenerate the manual page when the CLI or metadata changes.
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=CARGO_PKG_VERSION");
    println!("cargo:rerun-if-env-changed=CARGO_PKG_DESCRIPTION");

    // Packagers expect man pages inside the crate directory under target/.
    let out_dir = PathBuf::from("target/generated-man");
    fs::create_dir_all(&out_dir)?;

    let cmd = cli::Cli::command();
    let name = cmd.get_name().to_owned();
    let mut buf = Vec::new();
    Man::new(cmd).render(&mut buf)?;
    fs::write(out_dir.join(format!("{name}.1")), buf)?;

    Ok(())
}
