//! Kindcheck Core - loading, aggregation, and the validation facade
//!
//! This crate turns a source (a file path or in-memory content) into entity
//! documents, runs every document through the rule evaluator, and reports
//! the aggregate outcome. It is the single entry point external callers use:
//!
//! ```no_run
//! match kindcheck_core::validate_file("catalog-info.yaml", false) {
//!     Ok(report) => println!("{} document(s) valid", report.document_count()),
//!     Err(err) => eprintln!("{}", err),
//! }
//! ```
//!
//! The facade is synchronous and stateless across calls: each invocation
//! creates its own report and shares nothing mutable, so different sources
//! can be validated concurrently without coordination. The only shared data
//! is the read-only schema registry, initialized once.
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod document;
pub mod error;
pub mod loader;
pub mod report;

pub use document::EntityDocument;
pub use error::{Error, Result};
pub use loader::Format;
pub use report::{aggregate, aggregate_with, DocumentReport, FileReport};

use std::path::Path;
use tracing::{info, instrument};

/// Validate every entity document in a file.
///
/// Returns the report when all documents pass. Fails with [`Error::Io`] or
/// [`Error::Parse`] when the source cannot be loaded, and with
/// [`Error::Validation`] — carrying the full report, every violation
/// enumerated in deterministic order — when any rule is broken.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn validate_file(path: impl AsRef<Path>, verbose: bool) -> Result<FileReport> {
    let path = path.as_ref();
    let documents = loader::load_path(path)?;
    finish(path.display().to_string(), &documents, verbose)
}

/// Validate in-memory content as if it were a file named `source`.
pub fn validate_source(source: &str, content: &str, verbose: bool) -> Result<FileReport> {
    let path = Path::new(source);
    let documents = loader::parse_content(path, content, Format::from_path(path))?;
    finish(source.to_string(), &documents, verbose)
}

fn finish(source: String, documents: &[EntityDocument], verbose: bool) -> Result<FileReport> {
    let report = report::aggregate(source, documents);
    if !report.pass() {
        return Err(Error::Validation(report));
    }
    if verbose {
        // Informational only; pass/fail was already decided above
        info!(
            source = %report.source,
            documents = report.document_count(),
            "all documents valid"
        );
        for (kind, count) in report.kind_breakdown() {
            info!(source = %report.source, kind = %kind, count, "validated");
        }
    }
    Ok(report)
}
