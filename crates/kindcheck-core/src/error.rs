//! Error taxonomy for the validation facade
//!
//! Two families, never conflated: load errors (the source could not be read
//! or parsed into documents) and validation errors (one or more rule
//! violations, always carrying the full list).
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::report::FileReport;
use std::io;
use std::path::{Path, PathBuf};

/// Result type alias for facade operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The source was read but could not be parsed into documents
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// One or more rule violations; the report enumerates every one
    #[error("{0}")]
    Validation(FileReport),
}

impl Error {
    /// Build a parse error from any parser's error value
    pub fn parse(path: &Path, reason: impl ToString) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Whether this is a load failure (I/O or parse) rather than a rule
    /// violation
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Io { .. } | Self::Parse { .. })
    }

    /// The full report behind a validation failure
    pub fn report(&self) -> Option<&FileReport> {
        match self {
            Self::Validation(report) => Some(report),
            _ => None,
        }
    }
}
