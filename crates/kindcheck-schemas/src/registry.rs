//! Schema registry: immutable per-kind rule sets looked up by kind name
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::kinds;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Global registry, built once from the built-in kind table
static REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Shape constraint for a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Scalar string
    String,
    /// Key/value mapping
    Mapping,
    /// Ordered sequence
    Sequence,
}

impl Shape {
    /// Whether a document value satisfies this shape
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Shape::String => value.is_string(),
            Shape::Mapping => value.is_object(),
            Shape::Sequence => value.is_array(),
        }
    }

    /// Name used in violation messages
    pub fn name(&self) -> &'static str {
        match self {
            Shape::String => "string",
            Shape::Mapping => "mapping",
            Shape::Sequence => "sequence",
        }
    }

    /// Describe the shape a document value actually has
    pub fn of(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "sequence",
            Value::Object(_) => "mapping",
        }
    }
}

/// Constraint on one field under `spec`, applied only when the field is present
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field path relative to `spec`, e.g. `lifecycle`
    pub path: &'static str,
    /// Required shape
    pub shape: Shape,
    /// Enumerated allowed values, when the field has a closed vocabulary
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldRule {
    pub const fn of(path: &'static str, shape: Shape) -> Self {
        Self {
            path,
            shape,
            allowed: None,
        }
    }

    pub const fn one_of(path: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            path,
            shape: Shape::String,
            allowed: Some(allowed),
        }
    }
}

/// Immutable rule set for one entity kind.
///
/// Loaded once at startup and shared read-only across all validations; the
/// rules are data, so new kinds can be registered without touching the
/// evaluator.
#[derive(Debug, Clone)]
pub struct KindSchema {
    /// Kind name, matched case-sensitively against the declared `kind`
    pub kind: &'static str,
    /// Field paths under `spec` that must be present
    pub required: &'static [&'static str],
    /// Shape and allowed-value constraints per field under `spec`
    pub fields: &'static [FieldRule],
    /// Groups where at least one member field must be present under `spec`
    pub any_of: &'static [&'static [&'static str]],
}

impl KindSchema {
    /// Whether documents of this kind must carry a `spec` mapping at all
    pub fn requires_spec(&self) -> bool {
        !self.required.is_empty() || !self.any_of.is_empty()
    }
}

/// Lookup table of kind schemas, populated at startup and never mutated
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, KindSchema>,
    /// Kind names in registration order, for deterministic messages
    kind_names: Vec<&'static str>,
}

impl SchemaRegistry {
    /// The process-wide registry of built-in kinds
    pub fn global() -> &'static SchemaRegistry {
        REGISTRY.get_or_init(SchemaRegistry::builtin)
    }

    /// Registry holding only the built-in kind table
    pub fn builtin() -> Self {
        Self::from_schemas(kinds::builtin_schemas())
    }

    /// Registry holding the built-in kinds plus caller-supplied extras.
    ///
    /// An extra schema whose kind collides with a built-in one replaces it.
    pub fn with_schemas(extra: Vec<KindSchema>) -> Self {
        let mut schemas = kinds::builtin_schemas();
        schemas.extend(extra);
        Self::from_schemas(schemas)
    }

    fn from_schemas(list: Vec<KindSchema>) -> Self {
        let mut schemas = HashMap::with_capacity(list.len());
        let mut kind_names = Vec::with_capacity(list.len());
        for schema in list {
            if schemas.insert(schema.kind, schema.clone()).is_none() {
                kind_names.push(schema.kind);
            }
        }
        Self {
            schemas,
            kind_names,
        }
    }

    /// Case-sensitive exact-match lookup on the declared kind string
    pub fn schema_for(&self, kind: &str) -> Option<&KindSchema> {
        self.schemas.get(kind)
    }

    /// Registered kind names, in registration order
    pub fn kinds(&self) -> &[&'static str] {
        &self.kind_names
    }
}
