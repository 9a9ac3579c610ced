//! # Manuscript Builder
//!
//! Ties the manifest resolver and the output compiler into a single build.
//!
//! A build runs as one sequential pipeline:
//!
//! 1.  Resolve the manifest into a [`FragmentList`].
//! 2.  Remove any previous output.
//! 3.  Append each fragment, transformed and separated, in list order.
//!
//! Two builds writing the same output at the same time race; the last writer
//! wins.

use std::time::{Duration, Instant};

use log::info;

use crate::compile::{self, CompileReport};
use crate::config::BuildConfig;
use crate::error::Result;
use crate::manifest::{self, FragmentList};

/// Result of a successful build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// What the compiler wrote.
    pub compiled: CompileReport,
    /// Wall-clock time of the build.
    pub duration: Duration,
}

/// Compiles a manuscript according to a fixed [`BuildConfig`].
#[derive(Debug, Clone)]
pub struct ManuscriptBuilder {
    config: BuildConfig,
}

impl ManuscriptBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Resolve the fragment list without writing anything.
    pub fn fragments(&self) -> Result<FragmentList> {
        manifest::resolve(&self.config)
    }

    /// Run a full build.
    pub fn build(&self) -> Result<BuildReport> {
        let start_time = Instant::now();
        info!(
            "Building {} from {}",
            self.config.output_path.display(),
            self.config.manifest_path.display()
        );

        let fragments = self.fragments()?;
        let compiled = compile::compile(
            &self.config.output_path,
            &fragments,
            &self.config.separator,
        )?;

        let duration = start_time.elapsed();
        info!(
            "Compiled {} fragments ({} bytes) into {} in {:.2}s",
            compiled.fragments,
            compiled.bytes_written,
            compiled.output_path.display(),
            duration.as_secs_f64()
        );

        Ok(BuildReport {
            compiled,
            duration,
        })
    }
}
