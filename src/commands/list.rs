//! # List Command Implementation
//!
//! Prints the fragment list a build would compile, in order, without touching
//! the output. With `--check`, each fragment is tested for existence and the
//! command fails if any is missing, which catches manifest typos before a
//! build aborts halfway.

use anyhow::Result;
use clap::Args;
use std::path::Path;

use manuscript_builder::output::{emoji, OutputConfig};
use manuscript_builder::ManuscriptBuilder;

use super::SourceArgs;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Report fragments that do not exist and fail if there are any
    #[arg(long)]
    pub check: bool,
}

/// Execute the list command
pub fn execute(args: ListArgs, color_flag: &str) -> Result<()> {
    let base_dir = super::base_dir()?;
    run(args, &base_dir, color_flag)
}

fn run(args: ListArgs, base_dir: &Path, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let check = args.check;
    let builder = ManuscriptBuilder::new(args.source.load(base_dir)?);
    let fragments = builder.fragments()?;

    let mut missing = 0;
    for path in &fragments {
        if check && !path.is_file() {
            missing += 1;
            println!("{} {}", emoji(&out, "❌", "[MISSING]"), path.display());
        } else {
            println!("{}", path.display());
        }
    }

    if missing > 0 {
        anyhow::bail!(
            "{} of {} fragments are missing",
            missing,
            fragments.len()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn args(check: bool) -> ListArgs {
        ListArgs {
            source: SourceArgs {
                book_dir: Some("book/".to_string()),
                table_of_contents: Some("book/Book.txt".to_string()),
                ..Default::default()
            },
            check,
        }
    }

    fn setup() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let book = temp_dir.path().join("book");
        fs::create_dir(&book).unwrap();
        fs::write(book.join("Book.txt"), "ch1.md\nch2.md\n").unwrap();
        fs::write(book.join("ch1.md"), "one").unwrap();
        temp_dir
    }

    #[test]
    fn test_list_without_check_succeeds() {
        let temp_dir = setup();
        run(args(false), temp_dir.path(), "never").unwrap();
        assert!(!temp_dir.path().join("readme.md").exists());
    }

    #[test]
    fn test_list_check_reports_missing() {
        let temp_dir = setup();
        let err = run(args(true), temp_dir.path(), "never").unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 fragments are missing");
    }
}
