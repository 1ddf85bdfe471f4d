//! Violation records produced by the rule evaluator
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One detected rule break, immutable after creation.
///
/// A violation locates the problem (`path`, dotted from the document root),
/// describes it (`message`), and where it helps the reader, carries what was
/// expected and what was actually found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
pub struct Violation {
    /// Dotted field path from the document root, e.g. `spec.lifecycle`
    pub path: String,
    /// Human-readable description of the broken rule
    pub message: String,
    /// What the rule expected, when enumerable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// The offending value or shape, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)?;
        match (&self.expected, &self.actual) {
            (Some(expected), Some(actual)) => {
                write!(f, " (expected {}, found {})", expected, actual)
            }
            (Some(expected), None) => write!(f, " (expected {})", expected),
            (None, Some(actual)) => write!(f, " (found {})", actual),
            (None, None) => Ok(()),
        }
    }
}

impl Violation {
    /// Create a violation with just a path and message
    pub fn new<P, M>(path: P, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// A required field is absent
    pub fn missing<P: Into<String>>(path: P) -> Self {
        Self::new(path, "required field is missing")
    }

    /// A field is present but has the wrong shape
    pub fn wrong_shape<P: Into<String>>(path: P, expected: &str, actual: &str) -> Self {
        Self {
            path: path.into(),
            message: "field has the wrong type".to_string(),
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        }
    }

    /// A field value is outside its enumerated allowed set
    pub fn not_allowed<P: Into<String>>(path: P, value: &str, allowed: &[&str]) -> Self {
        Self {
            path: path.into(),
            message: "value is not allowed".to_string(),
            expected: Some(format!("one of: {}", allowed.join(", "))),
            actual: Some(format!("\"{}\"", value)),
        }
    }

    /// A name token breaks the allowed syntax
    pub fn bad_name<P: Into<String>>(path: P, value: &str) -> Self {
        Self {
            path: path.into(),
            message: "must be 1-63 characters of [a-zA-Z0-9_.-], starting and ending \
                      with an alphanumeric character"
                .to_string(),
            expected: None,
            actual: Some(format!("\"{}\"", value)),
        }
    }

    /// The declared kind has no registered schema
    pub fn unknown_kind(kind: &str, registered: &[&str]) -> Self {
        Self {
            path: "kind".to_string(),
            message: format!("unknown kind \"{}\": no schema registered", kind),
            expected: Some(format!("one of: {}", registered.join(", "))),
            actual: Some(format!("\"{}\"", kind)),
        }
    }
}
