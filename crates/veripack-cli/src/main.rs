//! Veripack CLI - Command-line utility for verifying archive contents
//! against SHA-256 checksum manifests.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let formatter = output::create_formatter(cli.json, cli.verbose, cli.quiet);

    commands::verify::execute(&cli, &*formatter)
}
