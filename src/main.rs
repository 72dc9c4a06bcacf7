//! sembump - CLI entry point.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

use sembump::manifest::{self, MANIFEST_PATH};
use sembump::version::BumpKind;

/// Bump the semantic version declared in Cargo.toml.
#[derive(Parser, Debug)]
#[command(name = "sembump")]
#[command(about = "Bump the semantic version declared in Cargo.toml")]
#[command(version)]
struct Cli {
    /// Which version component to increment
    #[arg(value_enum)]
    bump: BumpKind,
}

fn main() -> ExitCode {
    // Usage problems report on stdout and exit 1; clap's default would be
    // stderr and exit 2. Help and version keep their success exit.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            println!("{err}");
            return ExitCode::from(1);
        }
    };

    // Diagnostics go to stderr; stdout carries only the version transition.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let outcome = manifest::update_manifest(Path::new(MANIFEST_PATH), cli.bump)
        .context("Failed to update manifest version")?;

    println!("Version: {} -> {}", outcome.previous, outcome.next);

    Ok(())
}
