//! Terminal output for validation outcomes
//!
//! Success lines go to stdout, failures to stderr. Color is applied through
//! `colored`, which the entry point configures globally, so quiet and
//! no-color handling stays out of the formatting code here.

use colored::Colorize;
use kindcheck_core::{Error, FileReport};
use std::path::Path;

/// Writer for per-file outcomes and the final summary
pub struct OutputWriter {
    quiet: bool,
    verbosity: u8,
}

impl OutputWriter {
    pub fn new(quiet: bool, verbosity: u8) -> Self {
        Self { quiet, verbosity }
    }

    /// Report a file that validated cleanly
    pub fn file_passed(&self, report: &FileReport) {
        if self.quiet {
            return;
        }
        println!(
            "{} {} ({} document(s))",
            "✓".green(),
            report.source,
            report.document_count()
        );
        if self.verbosity >= 1 {
            for doc in &report.documents {
                println!(
                    "  {} {} ({}/{} checks passed)",
                    "✓".green(),
                    doc.label(),
                    doc.checks_passed,
                    doc.checks_total
                );
            }
        }
    }

    /// Report a file that failed to load or validate. The error's display
    /// already enumerates every violation, one per line.
    pub fn file_failed(&self, path: &Path, error: &Error) {
        eprintln!(
            "{} Failed to validate {}: {}",
            "✗".red(),
            path.display(),
            error
        );
    }

    /// Report a usage-level problem
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Final multi-file summary
    pub fn summary(&self, passed: usize, failed: usize) {
        if self.quiet || passed + failed < 2 {
            return;
        }
        if failed == 0 {
            println!("{} all {} file(s) valid", "✓".green(), passed);
        } else {
            println!(
                "{} {} of {} file(s) failed validation",
                "✗".red(),
                failed,
                passed + failed
            );
        }
    }
}
