//! # CLI Command Implementations
//!
//! Each subcommand of `manuscript-builder` lives in its own file with an
//! `Args` struct (derived with `clap`) and an `execute` function that calls
//! into the `manuscript_builder` library.
//!
//! [`SourceArgs`] holds the options shared by every command that reads a
//! manifest, and layers them over the `.manuscript.yaml` file.

pub mod build;
pub mod completions;
pub mod init;
pub mod list;

use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use manuscript_builder::defaults;
use manuscript_builder::{BuildConfig, BuildOptions};

/// Options that locate the manifest, fragments and output.
///
/// Anything given here overrides the configuration file.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Path to config file (defaults to .manuscript.yaml when present)
    #[arg(short, long, value_name = "PATH", env = "MANUSCRIPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output file, relative to the working directory
    #[arg(short, long, value_name = "PATH")]
    pub target: Option<String>,

    /// Directory prefix for manifest entries
    #[arg(long, value_name = "DIR")]
    pub book_dir: Option<String>,

    /// Manifest file listing the fragments in order
    #[arg(long = "toc", visible_alias = "table-of-contents", value_name = "PATH")]
    pub table_of_contents: Option<String>,

    /// Fragment always compiled first (repeatable, kept in order)
    #[arg(short, long = "include", value_name = "PATH")]
    pub include: Vec<String>,

    /// Manifest line to skip (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "LINE")]
    pub exclude: Vec<String>,

    /// Text inserted after each fragment
    #[arg(long, value_name = "TEXT")]
    pub separator: Option<String>,
}

impl SourceArgs {
    /// Build the configuration for a run rooted at `base_dir`.
    pub fn load(self, base_dir: &Path) -> Result<BuildConfig> {
        let file_options = match &self.config {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                read_options(path)?
            }
            None => {
                let default_path = base_dir.join(defaults::CONFIG_FILE);
                if default_path.exists() {
                    read_options(&default_path)?
                } else {
                    BuildOptions::default()
                }
            }
        };

        let flag_options = BuildOptions {
            target: self.target,
            book_dir: self.book_dir,
            table_of_contents: self.table_of_contents,
            include: non_empty(self.include),
            exclude: non_empty(self.exclude),
            separator: self.separator,
        };

        Ok(BuildConfig::from_options(
            file_options.merge(flag_options),
            base_dir,
        ))
    }
}

fn read_options(path: &Path) -> Result<BuildOptions> {
    log::debug!("Reading configuration {}", path.display());
    BuildOptions::from_file(path)
        .with_context(|| format!("Failed to load configuration {}", path.display()))
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// The directory builds are anchored to.
pub fn base_dir() -> Result<PathBuf> {
    std::env::current_dir().context("Failed to get current directory")
}
