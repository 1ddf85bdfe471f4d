//! Logging setup for the CLI
//!
//! Library crates log through `tracing`; this module maps the CLI's
//! verbosity flags onto an `EnvFilter` and installs the subscriber. The
//! `KINDCHECK_LOG` environment variable overrides the flag-derived level.

use tracing_subscriber::EnvFilter;

/// Map a verbosity count to a default filter directive
fn default_level(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber. Logs go to stderr so they never mix
/// with validation output.
pub fn init(
    verbosity: u8,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env("KINDCHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .try_init()
}
