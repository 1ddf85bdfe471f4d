//! Kindcheck Schemas - per-kind rule tables and the rule evaluator
//!
//! This crate holds the validation engine for Backstage catalog entity
//! documents: the immutable per-kind rule model, the built-in registry of
//! kind schemas, and the evaluator that walks one parsed document and
//! reports every rule violation it finds.
//!
//! ## Quick Start
//!
//! ```rust
//! use kindcheck_schemas::evaluate;
//! use serde_json::json;
//!
//! let doc = json!({
//!     "apiVersion": "backstage.io/v1alpha1",
//!     "kind": "Component",
//!     "metadata": {"name": "svc-a"},
//!     "spec": {"type": "service", "lifecycle": "production", "owner": "team-x"}
//! });
//!
//! let evaluation = evaluate(&doc);
//! assert!(evaluation.pass());
//! ```
//!
//! ## Design
//!
//! - Kinds are a closed (but extensible) set of rule-set values looked up by
//!   the declared `kind` string, never a type hierarchy.
//! - The evaluator never stops at the first problem: every check runs and
//!   every violation is reported, in a deterministic order (structural
//!   checks first, then kind-specific checks in table order).
//! - An unrecognized kind is itself a violation, not a crash.
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

pub mod evaluate;
pub mod kinds;
pub mod registry;
pub mod violation;

// Re-export commonly used types
pub use evaluate::{evaluate, is_valid_name, Evaluation, Evaluator};
pub use registry::{FieldRule, KindSchema, SchemaRegistry, Shape};
pub use violation::Violation;
