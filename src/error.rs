//! # Error Handling
//!
//! This module defines the error type shared by every stage of a manuscript
//! build. It uses `thiserror` to derive descriptive messages for each failure
//! mode.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of everything that can go wrong while resolving a
//!   manifest, compiling fragments, or loading configuration. The four build
//!   failures (`ManifestNotFound`, `ManifestRead`, `FragmentNotFound`,
//!   `OutputWrite`) carry the offending path and the underlying I/O error.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Every build error is terminal. Nothing in the library retries; output that
//! was appended before a failure stays on disk.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for manuscript-builder operations
#[derive(Error, Debug)]
pub enum Error {
    /// The manifest file could not be opened because it does not exist.
    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file exists but could not be read.
    #[error("Failed to read manifest '{}': {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fragment listed in the manifest (or included literally) could not be
    /// opened for reading. Compilation stops at the first such fragment.
    #[error("Fragment not found: {} ({source})", path.display())]
    FragmentNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be removed, created, or appended to.
    #[error("Failed to write output '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The `.manuscript.yaml` configuration could not be interpreted.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
