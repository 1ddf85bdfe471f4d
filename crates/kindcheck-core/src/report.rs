//! Per-file aggregation of evaluation results
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::document::EntityDocument;
use kindcheck_schemas::{Evaluator, SchemaRegistry, Violation};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Evaluation outcome for one document within a file
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReport {
    /// Zero-based position within the source file
    pub index: usize,
    /// Declared kind, when one was readable
    pub kind: Option<String>,
    /// Declared `metadata.name`, when one was readable
    pub name: Option<String>,
    /// Every violation found, in deterministic check order
    pub violations: Vec<Violation>,
    /// Informational counters for verbose output
    pub checks_passed: usize,
    pub checks_total: usize,
}

impl DocumentReport {
    pub fn pass(&self) -> bool {
        self.violations.is_empty()
    }

    /// Short label for messages, e.g. `Component svc-a` or `document 2`
    pub fn label(&self) -> String {
        match (&self.kind, &self.name) {
            (Some(kind), Some(name)) => format!("{} {}", kind, name),
            (Some(kind), None) => kind.clone(),
            _ => format!("document {}", self.index),
        }
    }
}

/// Aggregate outcome for every document in one source, owned by the caller
/// for the duration of one file's processing.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// The source identifier, usually a file path
    pub source: String,
    /// One entry per examined document, in file order
    pub documents: Vec<DocumentReport>,
}

impl FileReport {
    /// True iff no document produced any violation
    pub fn pass(&self) -> bool {
        self.documents.iter().all(DocumentReport::pass)
    }

    /// Total violations across all documents
    pub fn violation_count(&self) -> usize {
        self.documents.iter().map(|d| d.violations.len()).sum()
    }

    /// Number of documents examined
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Count of documents per declared kind, for the verbose summary
    pub fn kind_breakdown(&self) -> BTreeMap<String, usize> {
        let mut breakdown = BTreeMap::new();
        for doc in &self.documents {
            let kind = doc.kind.clone().unwrap_or_else(|| "<no kind>".to_string());
            *breakdown.entry(kind).or_insert(0) += 1;
        }
        breakdown
    }
}

impl fmt::Display for FileReport {
    /// One line per violation: file, document index, field path, message
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} violation(s) across {} document(s)",
            self.source,
            self.violation_count(),
            self.document_count()
        )?;
        for doc in &self.documents {
            for violation in &doc.violations {
                write!(f, "\n{}: document {}: {}", self.source, doc.index, violation)?;
            }
        }
        Ok(())
    }
}

/// Evaluate every document independently and collect the outcomes. One
/// document's failures never prevent evaluation of the next.
pub fn aggregate(source: impl Into<String>, documents: &[EntityDocument]) -> FileReport {
    aggregate_with(Evaluator::new(SchemaRegistry::global()), source, documents)
}

/// Aggregate against a caller-supplied evaluator (extra registered kinds)
pub fn aggregate_with(
    evaluator: Evaluator<'_>,
    source: impl Into<String>,
    documents: &[EntityDocument],
) -> FileReport {
    let source = source.into();
    let documents = documents
        .iter()
        .map(|doc| {
            let evaluation = evaluator.evaluate(doc.value());
            debug!(
                source = %source,
                index = doc.index(),
                violations = evaluation.violations.len(),
                checks_passed = evaluation.checks_passed,
                "evaluated document"
            );
            DocumentReport {
                index: doc.index(),
                kind: doc.kind().map(str::to_string),
                name: doc.name().map(str::to_string),
                violations: evaluation.violations,
                checks_passed: evaluation.checks_passed,
                checks_total: evaluation.checks_total,
            }
        })
        .collect();
    FileReport { source, documents }
}
