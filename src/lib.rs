//! # Manuscript Builder Library
//!
//! Compiles a book that is split into per-chapter files into one document.
//! A manifest (the table of contents) lists the chapter files in order, with
//! optional `frontmatter:`, `mainmatter:` and `backmatter:` section markers.
//! The library is used by the `manuscript-builder` command-line tool but has
//! no dependency on it.
//!
//! ## Quick Example
//!
//! ```no_run
//! use manuscript_builder::{BuildConfig, BuildOptions, ManuscriptBuilder};
//! use std::path::Path;
//!
//! let options = BuildOptions {
//!     target: Some("/book.md".to_string()),
//!     book_dir: Some("/book/".to_string()),
//!     table_of_contents: Some("/book/Book.txt".to_string()),
//!     ..Default::default()
//! };
//! let config = BuildConfig::from_options(options, Path::new("/home/me/novel"));
//!
//! let report = ManuscriptBuilder::new(config).build()?;
//! println!("{} fragments written", report.compiled.fragments);
//! # Ok::<(), manuscript_builder::Error>(())
//! ```
//!
//! ## Core Concepts
//!
//! - **Configuration (`config`)**: Caller options and their resolution into an
//!   immutable `BuildConfig` anchored at an explicit base directory.
//! - **Manifest (`manifest`)**: Turns manifest text into the ordered list of
//!   fragment paths, dropping markers, blank lines and excluded lines.
//! - **Compiler (`compile`)**: Clears the previous output and appends every
//!   fragment, with code-fence markers rewritten and a separator after each.
//! - **Builder (`builder`)**: Runs the two in sequence.

pub mod builder;
pub mod compile;
pub mod config;
pub mod defaults;
pub mod error;
pub mod manifest;
pub mod output;

#[cfg(test)]
mod manifest_proptest;

pub use builder::{BuildReport, ManuscriptBuilder};
pub use config::{BuildConfig, BuildOptions};
pub use error::{Error, Result};
pub use manifest::FragmentList;
