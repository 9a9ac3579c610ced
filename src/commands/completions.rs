//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete`.
//!
//! ```bash
//! manuscript-builder completions bash > ~/.local/share/bash-completion/completions/manuscript-builder
//! manuscript-builder completions zsh > ~/.zfunc/_manuscript-builder
//! ```

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

use crate::cli::Cli;

const BIN_NAME: &str = "manuscript-builder";

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for the requested shell to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    write_completions(args.shell, &mut io::stdout());
    Ok(())
}

fn write_completions(shell: Shell, buf: &mut dyn Write) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN_NAME, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bash_completions_mention_subcommands() {
        let mut buf = Vec::new();
        write_completions(Shell::Bash, &mut buf);
        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains(BIN_NAME));
        assert!(script.contains("build"));
        assert!(script.contains("list"));
    }
}
