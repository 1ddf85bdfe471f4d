//! GitHub Action wiring
//!
//! When run as a GitHub Action, the runner passes the action's `path` input
//! through the `INPUT_PATH` environment variable, expects step outputs to be
//! appended to the file named by `GITHUB_OUTPUT`, and renders `::error::`
//! workflow commands as failure annotations. All of that is plain env-var
//! and file I/O; the validation engine knows nothing about it.

use chrono::Local;
use std::env;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Hosted-environment adapter, inert outside of a GitHub Action run
#[derive(Debug)]
pub struct ActionContext {
    active: bool,
}

impl ActionContext {
    /// Detect whether we are running as a GitHub Action. The `path` input is
    /// empty in non-GitHub environments.
    pub fn detect() -> Self {
        let active = Self::input_path().is_some();
        if active {
            debug!("GitHub Action environment detected");
        }
        Self { active }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The file path supplied through the action's `path` input, if any
    pub fn input_path() -> Option<PathBuf> {
        match env::var("INPUT_PATH") {
            Ok(path) if !path.trim().is_empty() => Some(PathBuf::from(path)),
            _ => None,
        }
    }

    /// Record the `time` step output before validating, as the action
    /// contract promises. Failures to write are logged, never fatal.
    pub fn record_time(&self) {
        if !self.active {
            return;
        }
        let Ok(output_file) = env::var("GITHUB_OUTPUT") else {
            warn!("GITHUB_OUTPUT is not set; skipping time output");
            return;
        };
        let line = format!("time={}\n", Local::now().format("%H:%M:%S %z"));
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&output_file)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(err) = written {
            warn!(file = %output_file, %err, "failed to write step output");
        }
    }

    /// Emit a failure annotation for the workflow log
    pub fn fail(&self, message: &str) {
        if !self.active {
            return;
        }
        // Workflow commands are single-line; newlines are escaped as %0A
        let escaped = message
            .replace('%', "%25")
            .replace('\r', "%0D")
            .replace('\n', "%0A");
        println!("::error::Validation failed: {}", escaped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inactive_context_is_inert() {
        let context = ActionContext { active: false };
        assert!(!context.is_active());
        // No panics, no output side effects
        context.record_time();
        context.fail("nothing happens");
    }
}
