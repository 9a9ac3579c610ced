//! # Output Compiler
//!
//! Streams every fragment of a [`FragmentList`] into the output file.
//!
//! ## Process
//!
//! 1.  **Clear**: Any file already at the output path is removed, so a rebuild
//!     never appends to stale content.
//!
//! 2.  **Transform**: Each fragment is read in full and every run of exactly
//!     eight tildes (`~~~~~~~~`) becomes a three-backtick code fence.
//!
//! 3.  **Append**: The transformed text plus the separator is appended to the
//!     output, which is created on the first write.
//!
//! Fragments are processed strictly in list order. The first fragment that
//! cannot be read aborts the run; whatever was appended before it stays.

use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, info};
use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::manifest::FragmentList;

/// Marker that authors write in place of a code fence.
pub const FENCE_MARKER: &str = "~~~~~~~~";

/// Replacement for [`FENCE_MARKER`].
pub const CODE_FENCE: &str = "```";

static TILDE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    // Literal pattern; it always compiles.
    Regex::new("~+").unwrap()
});

/// Summary of a finished compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileReport {
    /// File the fragments were written to.
    pub output_path: PathBuf,
    /// Number of fragments appended.
    pub fragments: usize,
    /// Total bytes appended, separators included.
    pub bytes_written: usize,
    /// Whether an earlier output file was removed first.
    pub replaced_previous: bool,
}

/// Replace every run of exactly eight tildes with a code fence.
///
/// Longer and shorter runs are left as they are.
pub fn transform(content: &str) -> Cow<'_, str> {
    TILDE_RUN.replace_all(content, |caps: &Captures| {
        let run = &caps[0];
        if run == FENCE_MARKER {
            CODE_FENCE.to_string()
        } else {
            run.to_string()
        }
    })
}

/// Remove `output_path` if it exists.
///
/// Returns whether a file was removed.
pub fn clear_output(output_path: &Path) -> Result<bool> {
    match fs::remove_file(output_path) {
        Ok(()) => {
            info!("Removed previous output {}", output_path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(source) => Err(Error::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        }),
    }
}

/// Append each fragment, transformed and followed by `separator`, to
/// `output_path`.
///
/// Does not clear the output first; see [`compile`].
fn append_fragments(
    output_path: &Path,
    fragments: &FragmentList,
    separator: &str,
) -> Result<CompileReport> {
    let mut bytes_written = 0;

    for fragment in fragments {
        let content = read_fragment(fragment)?;
        let mut chunk = transform(&content).into_owned();
        chunk.push_str(separator);

        append(output_path, chunk.as_bytes())?;
        debug!(
            "Appended {} ({} bytes) to {}",
            fragment.display(),
            chunk.len(),
            output_path.display()
        );
        bytes_written += chunk.len();
    }

    Ok(CompileReport {
        output_path: output_path.to_path_buf(),
        fragments: fragments.len(),
        bytes_written,
        replaced_previous: false,
    })
}

/// Clear `output_path`, then compile `fragments` into it.
pub fn compile(
    output_path: &Path,
    fragments: &FragmentList,
    separator: &str,
) -> Result<CompileReport> {
    let replaced_previous = clear_output(output_path)?;
    let report = append_fragments(output_path, fragments, separator)?;
    Ok(CompileReport {
        replaced_previous,
        ..report
    })
}

fn read_fragment(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::FragmentNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn append(output_path: &Path, bytes: &[u8]) -> Result<()> {
    let write_error = |source| Error::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .map_err(write_error)?;
    file.write_all(bytes).map_err(write_error)
}
