//! Kindcheck CLI - validate Backstage entity definition files
//!
//! Files may be specified as arguments, via standard input (`-i`, one per
//! line), or through a GitHub Action's `path` input. Every file is validated
//! independently; the process exits 0 only when every file passes and at
//! least one file was specified.

mod cli;
mod github;
mod logging;
mod output;

use cli::Cli;
use colored::control;
use github::ActionContext;
use output::OutputWriter;
use std::io::Read;
use std::path::PathBuf;
use std::process;
use tracing::info;

fn main() {
    let cli = Cli::parse_args();

    control::set_override(cli.use_color());

    if let Err(e) = logging::init(cli.verbosity_level(), cli.quiet) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    process::exit(run(cli));
}

fn run(cli: Cli) -> i32 {
    let writer = OutputWriter::new(cli.quiet, cli.verbosity_level());
    let github = ActionContext::detect();

    let files = match collect_files(&cli) {
        Ok(files) => files,
        Err(message) => {
            writer.error(&message);
            return 1;
        }
    };

    if files.is_empty() {
        writer.error("No files specified to validate");
        return 1;
    }

    info!(files = files.len(), "starting validation");

    // Every file is validated independently; one failure never skips the
    // rest, and the exit status reflects the whole run.
    let mut failed = 0usize;
    for file in &files {
        github.record_time();
        match kindcheck_core::validate_file(file, !cli.quiet) {
            Ok(report) => writer.file_passed(&report),
            Err(error) => {
                failed += 1;
                writer.file_failed(file, &error);
                github.fail(&error.to_string());
            }
        }
    }

    writer.summary(files.len() - failed, failed);
    if failed > 0 {
        1
    } else {
        0
    }
}

/// Assemble the file list: the Action's `path` input first, then arguments,
/// then stdin when requested.
fn collect_files(cli: &Cli) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    if let Some(path) = ActionContext::input_path() {
        files.push(path);
    }

    files.extend(cli.files.iter().cloned());

    if cli.stdin {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("failed to read file list from stdin: {}", e))?;
        files.extend(
            buffer
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(PathBuf::from),
        );
    }

    Ok(files)
}
