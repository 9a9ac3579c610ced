//! # Build Configuration
//!
//! This module turns caller-supplied options into the immutable [`BuildConfig`]
//! a build runs against.
//!
//! ## Key Components
//!
//! - **`BuildOptions`**: The raw option surface (`target`, `bookDir`,
//!   `tableOfContents`, `include`, `exclude`, `separator`). Every field is
//!   optional. Options come from a `.manuscript.yaml` file, from command-line
//!   flags, or from code, and are layered with [`BuildOptions::merge`].
//!
//! - **`BuildConfig`**: The resolved configuration. All paths are anchored to
//!   an explicit base directory and the structural markers are always part of
//!   the excluded lines.
//!
//! ## Path Resolution
//!
//! `target`, `tableOfContents` and `bookDir` are always relative to the base
//! directory, even when written with a leading `/` (`/book.md` means
//! `<base>/book.md`). `bookDir` keeps its raw text so that a trailing `/`
//! survives: fragment paths are `bookDir` followed directly by the manifest
//! line. `include` entries are joined onto the base directory, so absolute
//! entries stay absolute.
//!
//! ## Example
//!
//! ```
//! use manuscript_builder::config::{BuildConfig, BuildOptions};
//! use std::path::Path;
//!
//! let options = BuildOptions::parse("target: /book.md\nbookDir: /book/\n").unwrap();
//! let config = BuildConfig::from_options(options, Path::new("/work"));
//!
//! assert_eq!(config.output_path, Path::new("/work/book.md"));
//! assert_eq!(config.manifest_path, Path::new("/work/manuscript/Book.txt"));
//! assert!(config.excluded_lines.contains("frontmatter:"));
//! ```

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Caller-supplied build options, all optional.
///
/// Keys use the camelCase names of the original configuration surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildOptions {
    /// Output file, relative to the base directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Directory prefix for manifest-derived fragment paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub book_dir: Option<String>,
    /// Manifest file, relative to the base directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_of_contents: Option<String>,
    /// Fragment paths always compiled first, in the given order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    /// Manifest lines to drop in addition to the structural markers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<Vec<String>>,
    /// Text appended after each fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
}

impl BuildOptions {
    /// Parse options from YAML text. An empty document yields default options.
    pub fn parse(yaml_content: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml_content)?;
        if value.is_null() {
            return Ok(Self::default());
        }

        serde_yaml::from_value(value).map_err(|e| {
            let message = e.to_string();
            let hint = if message.contains("unknown field") {
                Some(
                    "Recognized options are target, bookDir, tableOfContents, include, exclude, separator"
                        .to_string(),
                )
            } else {
                None
            };
            Error::ConfigParse { message, hint }
        })
    }

    /// Read and parse options from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Layer `overrides` on top of `self`. Any option set in `overrides`
    /// replaces the corresponding option here; lists are replaced, not
    /// concatenated.
    pub fn merge(self, overrides: BuildOptions) -> Self {
        Self {
            target: overrides.target.or(self.target),
            book_dir: overrides.book_dir.or(self.book_dir),
            table_of_contents: overrides.table_of_contents.or(self.table_of_contents),
            include: overrides.include.or(self.include),
            exclude: overrides.exclude.or(self.exclude),
            separator: overrides.separator.or(self.separator),
        }
    }
}

/// Resolved, read-only configuration for a single build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Compiled document.
    pub output_path: PathBuf,
    /// Manifest file.
    pub manifest_path: PathBuf,
    /// Prefix concatenated with every manifest line.
    pub fragments_dir: PathBuf,
    /// Paths placed before every manifest-derived fragment.
    pub literal_includes: Vec<PathBuf>,
    /// Manifest lines that never name a fragment.
    pub excluded_lines: BTreeSet<String>,
    /// Text appended after each fragment.
    pub separator: String,
}

impl BuildConfig {
    /// Create a configuration from explicit paths, with no includes, only the
    /// structural markers excluded, and the default separator.
    pub fn new(
        output_path: impl Into<PathBuf>,
        manifest_path: impl Into<PathBuf>,
        fragments_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            output_path: output_path.into(),
            manifest_path: manifest_path.into(),
            fragments_dir: fragments_dir.into(),
            literal_includes: Vec::new(),
            excluded_lines: structural_markers(),
            separator: defaults::SEPARATOR.to_string(),
        }
    }

    /// Resolve `options` against `base_dir`, filling in defaults.
    pub fn from_options(options: BuildOptions, base_dir: &Path) -> Self {
        let target = options.target.as_deref().unwrap_or(defaults::TARGET);
        let toc = options
            .table_of_contents
            .as_deref()
            .unwrap_or(defaults::TABLE_OF_CONTENTS);
        let book_dir = options.book_dir.as_deref().unwrap_or(defaults::BOOK_DIR);

        let includes: Vec<PathBuf> = options
            .include
            .unwrap_or_default()
            .iter()
            .map(|include| base_dir.join(include))
            .collect();

        Self::new(
            under_base(base_dir, target),
            under_base(base_dir, toc),
            under_base(base_dir, book_dir),
        )
        .with_includes(includes)
        .with_excludes(options.exclude.unwrap_or_default())
        .with_separator(
            options
                .separator
                .unwrap_or_else(|| defaults::SEPARATOR.to_string()),
        )
    }

    /// Place `paths` before every manifest-derived fragment.
    pub fn with_includes<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.literal_includes = paths.into_iter().map(Into::into).collect();
        self
    }

    /// Drop `lines` from the manifest in addition to the structural markers.
    ///
    /// Trailing whitespace is trimmed, the same as for manifest lines.
    pub fn with_excludes<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_lines = structural_markers();
        self.excluded_lines.extend(lines.into_iter().map(|line| {
            let line: String = line.into();
            line.trim_end().to_string()
        }));
        self
    }

    /// Use `separator` after each fragment instead of the default.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

fn structural_markers() -> BTreeSet<String> {
    defaults::STRUCTURAL_MARKERS
        .iter()
        .map(|marker| marker.to_string())
        .collect()
}

/// Anchor `value` under `base`, ignoring leading slashes. The remaining text is
/// appended verbatim, so a trailing slash is kept.
fn under_base(base: &Path, value: &str) -> PathBuf {
    base.join(value.trim_start_matches('/'))
}
