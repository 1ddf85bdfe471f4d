//! Rule evaluation for one entity document
//!
//! The evaluator applies the structural rules shared by every kind, then the
//! kind-specific rules from the registry, and reports every violation it
//! finds. It never stops at the first problem within a document and never
//! fails itself: malformed input produces violations, not errors.
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::registry::{KindSchema, SchemaRegistry, Shape};
use crate::violation::Violation;
use serde_json::{Map, Value};

/// Outcome of evaluating one document.
///
/// The check counters exist for verbose reporting only; pass/fail is decided
/// by the violation list alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Every violation found, in deterministic check order
    pub violations: Vec<Violation>,
    /// Number of checks that passed
    pub checks_passed: usize,
    /// Number of checks that ran
    pub checks_total: usize,
}

impl Evaluation {
    /// True iff no violations were found
    pub fn pass(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Evaluate one document against the global registry
pub fn evaluate(doc: &Value) -> Evaluation {
    Evaluator::new(SchemaRegistry::global()).evaluate(doc)
}

/// Whether a string is a valid entity name token: 1-63 characters of
/// `[a-zA-Z0-9_.-]`, starting and ending with an alphanumeric character.
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() || name.len() > 63 {
        return false;
    }
    let edges_ok = name.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
        && name.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
    edges_ok
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

/// Rule evaluator bound to one schema registry
#[derive(Debug, Clone, Copy)]
pub struct Evaluator<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> Evaluator<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Apply every rule to one parsed document.
    ///
    /// Check order is fixed and significant for deterministic output:
    /// document shape, `apiVersion`, `kind`, `metadata` and its fields, then
    /// kind resolution and the kind-specific rules in table order.
    pub fn evaluate(&self, doc: &Value) -> Evaluation {
        let mut checks = Checks::default();

        let root = match doc.as_object() {
            Some(root) => {
                checks.ok();
                root
            }
            None => {
                // A bare scalar or sequence gets exactly one violation and
                // no further checks.
                checks.fail(Violation {
                    path: "$".to_string(),
                    message: "not an entity document".to_string(),
                    expected: Some("mapping".to_string()),
                    actual: Some(Shape::of(doc).to_string()),
                });
                return checks.finish();
            }
        };

        self.check_string_field(&mut checks, root, "apiVersion");
        self.check_string_field(&mut checks, root, "kind");
        self.check_metadata(&mut checks, root);

        // Kind-specific rules need a declared kind to dispatch on; a missing
        // or mistyped kind was already reported above.
        if let Some(kind) = root.get("kind").and_then(Value::as_str) {
            match self.registry.schema_for(kind) {
                Some(schema) => self.check_kind_rules(&mut checks, root, schema),
                None => checks.fail(Violation::unknown_kind(kind, self.registry.kinds())),
            }
        }

        checks.finish()
    }

    /// Presence plus string type as a single check per field
    fn check_string_field(&self, checks: &mut Checks, root: &Map<String, Value>, field: &str) {
        match root.get(field) {
            None => checks.fail(Violation::missing(field)),
            Some(value) if !value.is_string() => {
                checks.fail(Violation::wrong_shape(field, "string", Shape::of(value)))
            }
            Some(_) => checks.ok(),
        }
    }

    fn check_metadata(&self, checks: &mut Checks, root: &Map<String, Value>) {
        let metadata = match root.get("metadata") {
            None => {
                checks.fail(Violation::missing("metadata"));
                return;
            }
            Some(value) => match value.as_object() {
                Some(metadata) => {
                    checks.ok();
                    metadata
                }
                None => {
                    checks.fail(Violation::wrong_shape(
                        "metadata",
                        "mapping",
                        Shape::of(value),
                    ));
                    return;
                }
            },
        };

        // Presence, string type, and token syntax count as one check so a
        // bad name yields a single violation naming the broken constraint.
        match metadata.get("name") {
            None => checks.fail(Violation::missing("metadata.name")),
            Some(value) => match value.as_str() {
                Some(name) if is_valid_name(name) => checks.ok(),
                Some(name) => checks.fail(Violation::bad_name("metadata.name", name)),
                None => checks.fail(Violation::wrong_shape(
                    "metadata.name",
                    "string",
                    Shape::of(value),
                )),
            },
        }

        if let Some(value) = metadata.get("namespace") {
            match value.as_str() {
                Some(ns) if is_valid_name(ns) => checks.ok(),
                Some(ns) => checks.fail(Violation::bad_name("metadata.namespace", ns)),
                None => checks.fail(Violation::wrong_shape(
                    "metadata.namespace",
                    "string",
                    Shape::of(value),
                )),
            }
        }

        for field in ["labels", "annotations"] {
            if let Some(value) = metadata.get(field) {
                let path = format!("metadata.{}", field);
                match value.as_object() {
                    Some(map) if map.values().all(Value::is_string) => checks.ok(),
                    Some(_) => checks.fail(Violation::new(
                        path,
                        "values must all be strings",
                    )),
                    None => checks.fail(Violation::wrong_shape(path, "mapping", Shape::of(value))),
                }
            }
        }

        if let Some(value) = metadata.get("tags") {
            match value.as_array() {
                Some(tags) if tags.iter().all(Value::is_string) => checks.ok(),
                Some(_) => checks.fail(Violation::new(
                    "metadata.tags",
                    "entries must all be strings",
                )),
                None => checks.fail(Violation::wrong_shape(
                    "metadata.tags",
                    "sequence",
                    Shape::of(value),
                )),
            }
        }
    }

    fn check_kind_rules(&self, checks: &mut Checks, root: &Map<String, Value>, schema: &KindSchema) {
        let spec = match root.get("spec") {
            None => {
                // One violation for the missing spec itself; walking the
                // required list against nothing would only repeat it.
                if schema.requires_spec() {
                    checks.fail(Violation::missing("spec"));
                }
                return;
            }
            Some(value) => match value.as_object() {
                Some(spec) => {
                    checks.ok();
                    spec
                }
                None => {
                    checks.fail(Violation::wrong_shape("spec", "mapping", Shape::of(value)));
                    return;
                }
            },
        };

        for required in schema.required {
            if spec.contains_key(*required) {
                checks.ok();
            } else {
                checks.fail(Violation::missing(format!("spec.{}", required)));
            }
        }

        for group in schema.any_of {
            if group.iter().any(|field| spec.contains_key(*field)) {
                checks.ok();
            } else {
                let paths: Vec<String> =
                    group.iter().map(|field| format!("spec.{}", field)).collect();
                checks.fail(Violation::new(
                    "spec",
                    format!("at least one of {} must be declared", paths.join(", ")),
                ));
            }
        }

        // Enumerated vocabularies first, then shapes, each applied only to
        // fields that are present. A non-string value in an enum field is
        // left to the shape pass so it is diagnosed once.
        for rule in schema.fields {
            let (Some(allowed), Some(value)) = (rule.allowed, spec.get(rule.path)) else {
                continue;
            };
            if let Some(text) = value.as_str() {
                if allowed.contains(&text) {
                    checks.ok();
                } else {
                    checks.fail(Violation::not_allowed(
                        format!("spec.{}", rule.path),
                        text,
                        allowed,
                    ));
                }
            }
        }

        for rule in schema.fields {
            if let Some(value) = spec.get(rule.path) {
                if rule.shape.matches(value) {
                    checks.ok();
                } else {
                    checks.fail(Violation::wrong_shape(
                        format!("spec.{}", rule.path),
                        rule.shape.name(),
                        Shape::of(value),
                    ));
                }
            }
        }
    }
}

/// Accumulator for the pass/fail counters and the ordered violation list
#[derive(Debug, Default)]
struct Checks {
    violations: Vec<Violation>,
    passed: usize,
    total: usize,
}

impl Checks {
    fn ok(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    fn fail(&mut self, violation: Violation) {
        self.total += 1;
        self.violations.push(violation);
    }

    fn finish(self) -> Evaluation {
        Evaluation {
            violations: self.violations,
            checks_passed: self.passed,
            checks_total: self.total,
        }
    }
}
