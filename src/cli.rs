//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Manuscript Builder - Compile chapter files into a single document
#[derive(Parser, Debug)]
#[command(name = "manuscript-builder")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, value_name = "LEVEL", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile the manifest's fragments into the target document
    Build(commands::build::BuildArgs),

    /// Print the resolved fragment list without writing anything
    List(commands::list::ListArgs),

    /// Write a starter .manuscript.yaml configuration
    Init(commands::init::InitArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Build(args) => commands::build::execute(args, &self.color),
            Commands::List(args) => commands::list::execute(args, &self.color),
            Commands::Init(args) => commands::init::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // Ignore the error when a logger is already installed.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
