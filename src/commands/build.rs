//! Build command implementation
//!
//! Resolves the manifest, clears the previous output, and compiles every
//! fragment into the target document.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use manuscript_builder::output::{emoji, OutputConfig};
use manuscript_builder::ManuscriptBuilder;

use super::SourceArgs;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

/// Execute the build command
pub fn execute(args: BuildArgs, color_flag: &str) -> Result<()> {
    let base_dir = super::base_dir()?;
    run(args, &base_dir, color_flag)
}

fn run(args: BuildArgs, base_dir: &Path, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let quiet = args.quiet;
    let config = args.source.load(base_dir)?;
    let builder = ManuscriptBuilder::new(config);

    if !quiet {
        println!(
            "{} Building {} from {}",
            emoji(&out, "📖", "[BUILD]"),
            builder.config().output_path.display(),
            builder.config().manifest_path.display()
        );
    }

    match builder.build() {
        Ok(report) => {
            if !quiet {
                println!(
                    "{} Compiled {} fragments ({} bytes) in {:.2}s",
                    emoji(&out, "✅", "[OK]"),
                    report.compiled.fragments,
                    report.compiled.bytes_written,
                    report.duration.as_secs_f64()
                );
                if report.compiled.replaced_previous {
                    println!("   Replaced previous {}", report.compiled.output_path.display());
                }
            }
            Ok(())
        }
        Err(e) => {
            if !quiet {
                println!("{} Build failed", emoji(&out, "❌", "[ERR]"));
            }
            Err(e.into())
        }
    }
}
