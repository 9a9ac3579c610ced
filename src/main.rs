//! # Manuscript Builder CLI
//!
//! This is the binary entry point for the `manuscript-builder` command-line
//! tool. It parses arguments with `clap`, dispatches to a subcommand, and lets
//! `anyhow` render any error that escapes. The build logic itself lives in the
//! `manuscript_builder` library.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
