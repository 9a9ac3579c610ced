//! # Init Command Implementation
//!
//! Writes a starter `.manuscript.yaml` listing every option at its default
//! value, so authors have something to edit instead of a blank file.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use manuscript_builder::defaults;
use manuscript_builder::output::{emoji, OutputConfig};
use manuscript_builder::BuildOptions;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the configuration
    #[arg(
        short,
        long,
        value_name = "PATH",
        env = "MANUSCRIPT_CONFIG",
        default_value = defaults::CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    write_starter(&args.config, args.force)?;
    println!(
        "{} Wrote {}",
        emoji(&out, "✅", "[OK]"),
        args.config.display()
    );
    Ok(())
}

fn write_starter(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(path, starter_config()?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn starter_config() -> Result<String> {
    let options = BuildOptions {
        target: Some(defaults::TARGET.to_string()),
        book_dir: Some(defaults::BOOK_DIR.to_string()),
        table_of_contents: Some(defaults::TABLE_OF_CONTENTS.to_string()),
        include: Some(Vec::new()),
        exclude: Some(Vec::new()),
        separator: Some(defaults::SEPARATOR.to_string()),
    };
    let body = serde_yaml::to_string(&options).context("Failed to render configuration")?;
    Ok(format!(
        "# manuscript-builder configuration\n# Paths are relative to the directory the build runs in.\n{}",
        body
    ))
}
