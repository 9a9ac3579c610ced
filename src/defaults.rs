//! Default values for manuscript-builder configuration.
//!
//! This module provides centralized default values used by the configuration
//! layer and the CLI, so every entry point agrees on them.

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = ".manuscript.yaml";

/// Output document, relative to the base directory.
pub const TARGET: &str = "readme.md";

/// Manifest file, relative to the base directory.
pub const TABLE_OF_CONTENTS: &str = "manuscript/Book.txt";

/// Directory prefix for manifest entries. Keeps its trailing slash because
/// fragment paths are built by concatenation.
pub const BOOK_DIR: &str = "manuscript/";

/// Text appended after every fragment.
pub const SEPARATOR: &str = "\n\n\n";

/// Manifest lines that mark sections and never name a fragment.
pub const STRUCTURAL_MARKERS: [&str; 3] = ["frontmatter:", "mainmatter:", "backmatter:"];
