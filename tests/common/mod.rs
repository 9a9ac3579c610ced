//! Shared test utilities for integration and E2E tests.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! let fixture = TestFixture::new()
//!     .with_manifest(manifests::TWO_CHAPTERS)
//!     .with_chapter("ch1.txt", "One")
//!     .with_chapter("ch2.txt", "Two");
//! fixture.command().arg("build").assert().success();
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::manifests;
    pub use super::TestFixture;
}

/// Manifest snippets for the default `manuscript/Book.txt` location.
#[allow(dead_code)]
pub mod manifests {
    /// Two chapters with a section marker and a blank line.
    pub const TWO_CHAPTERS: &str = "frontmatter:\nch1.txt\n\nch2.txt\n";

    /// All three section markers around three chapters.
    pub const SECTIONED: &str =
        "frontmatter:\npreface.txt\nmainmatter:\nch1.txt\nbackmatter:\nappendix.txt\n";

    /// Same as `TWO_CHAPTERS` but with Windows line endings.
    pub const CRLF: &str = "frontmatter:\r\nch1.txt\r\n\r\nch2.txt\r\n";
}

/// A temporary book project laid out with the default paths.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `manuscript/Book.txt`.
    pub fn with_manifest(self, content: &str) -> Self {
        self.with_file("manuscript/Book.txt", content)
    }

    /// Write a chapter under `manuscript/`.
    pub fn with_chapter(self, name: &str, content: &str) -> Self {
        self.with_file(&format!("manuscript/{}", name), content)
    }

    /// Write `.manuscript.yaml`.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".manuscript.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the default build output.
    pub fn output_path(&self) -> PathBuf {
        self.path().join("readme.md")
    }

    /// Contents of the default build output.
    pub fn output(&self) -> String {
        std::fs::read_to_string(self.output_path()).expect("Failed to read build output")
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("manuscript-builder");
        cmd.current_dir(self.path())
            .env_remove("MANUSCRIPT_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
