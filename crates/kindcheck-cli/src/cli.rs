//! Command-line argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API. Files may
//! be passed as arguments, read from standard input one per line, or
//! supplied by a GitHub Action through its `path` input.

use clap::Parser;
use is_terminal::IsTerminal;
use std::path::PathBuf;

/// Validate Backstage entity definition files.
///
/// Every file is validated independently and every rule violation is
/// reported; the exit status is 0 only when all files pass.
#[derive(Parser, Debug)]
#[command(name = "kindcheck", version, author, about, long_about = None)]
pub struct Cli {
    /// Entity definition files to validate
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Also read newline-separated file paths from standard input
    #[arg(short = 'i', long = "stdin")]
    pub stdin: bool,

    /// Minimal output while validating entities
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase log verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Effective verbosity level (quiet wins)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Whether colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_files_and_flags() {
        let cli = Cli::parse_from(["kindcheck", "-i", "-q", "a.yaml", "b.yaml"]);
        assert_eq!(cli.files.len(), 2);
        assert!(cli.stdin);
        assert!(cli.quiet);
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::parse_from(["kindcheck", "-vv", "a.yaml"]);
        assert_eq!(cli.verbosity_level(), 2);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["kindcheck", "-q", "-v", "a.yaml"]).is_err());
    }
}
