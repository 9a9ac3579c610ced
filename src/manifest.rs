//! # Manifest Resolver
//!
//! Reads the manifest (the book's table of contents) and produces the ordered
//! [`FragmentList`] the compiler walks.
//!
//! ## Manifest Format
//!
//! One entry per line. Each line is trimmed of trailing whitespace (which also
//! removes the `\r` of CRLF files) and then:
//!
//! - blank lines are dropped,
//! - lines equal to an excluded line (always including `frontmatter:`,
//!   `mainmatter:` and `backmatter:`) are dropped,
//! - every other line is appended verbatim to the fragments directory.
//!
//! Excluded lines are trimmed the same way when the configuration is built, so
//! an exclusion written with trailing spaces still matches.
//!
//! Literal includes come first, in their configured order. Nothing here checks
//! that a fragment exists; that surfaces when the compiler opens it.
//!
//! The manifest is decoded as UTF-8 lossily, like fragment contents: invalid
//! byte sequences become `U+FFFD` instead of failing the build.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::BuildConfig;
use crate::error::{Error, Result};

/// Ordered fragment paths for a single build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentList {
    paths: Vec<PathBuf>,
}

impl FragmentList {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }

    pub fn as_slice(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.paths
    }
}

impl IntoIterator for FragmentList {
    type Item = PathBuf;
    type IntoIter = std::vec::IntoIter<PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a FragmentList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Read the manifest named by `config` and resolve it into a fragment list.
pub fn resolve(config: &BuildConfig) -> Result<FragmentList> {
    let contents = read_manifest(&config.manifest_path)?;
    let fragments = parse(
        &contents,
        &config.fragments_dir,
        &config.excluded_lines,
        &config.literal_includes,
    );

    debug!(
        "Resolved {} fragments from {}",
        fragments.len(),
        config.manifest_path.display()
    );
    Ok(fragments)
}

/// Resolve manifest text into a fragment list without touching the disk.
pub fn parse(
    contents: &str,
    fragments_dir: &Path,
    excluded_lines: &BTreeSet<String>,
    literal_includes: &[PathBuf],
) -> FragmentList {
    let manifest_entries = manifest_entries(contents, excluded_lines)
        .map(|entry| fragment_path(fragments_dir, entry));

    let paths = literal_includes
        .iter()
        .cloned()
        .chain(manifest_entries)
        .collect();

    FragmentList::new(paths)
}

/// Manifest lines that name fragments, in manifest order.
pub fn manifest_entries<'a>(
    contents: &'a str,
    excluded_lines: &'a BTreeSet<String>,
) -> impl Iterator<Item = &'a str> + 'a {
    contents
        .split('\n')
        .map(str::trim_end)
        .filter(move |line| !line.is_empty() && !excluded_lines.contains(*line))
}

/// `fragments_dir` immediately followed by `entry`, with no separator inserted.
fn fragment_path(fragments_dir: &Path, entry: &str) -> PathBuf {
    let mut path = OsString::from(fragments_dir.as_os_str());
    path.push(entry);
    PathBuf::from(path)
}

fn read_manifest(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::ManifestNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => Error::ManifestRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
