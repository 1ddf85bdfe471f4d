//! Parsed entity documents
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use serde_json::Value;

/// One entity document parsed from a source file, with its position within
/// that file. The tree is generic: mappings, sequences, and scalars, exactly
/// as the serialization layer produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDocument {
    index: usize,
    value: Value,
}

impl EntityDocument {
    pub fn new(index: usize, value: Value) -> Self {
        Self { index, value }
    }

    /// Zero-based position of this document within its source file
    pub fn index(&self) -> usize {
        self.index
    }

    /// The raw document tree
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Declared kind, when present and a string
    pub fn kind(&self) -> Option<&str> {
        self.value.get("kind").and_then(Value::as_str)
    }

    /// Declared `metadata.name`, when present and a string
    pub fn name(&self) -> Option<&str> {
        self.value
            .get("metadata")
            .and_then(|metadata| metadata.get("name"))
            .and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        let doc = EntityDocument::new(
            2,
            json!({"kind": "Component", "metadata": {"name": "svc-a"}}),
        );
        assert_eq!(doc.index(), 2);
        assert_eq!(doc.kind(), Some("Component"));
        assert_eq!(doc.name(), Some("svc-a"));
    }

    #[test]
    fn test_accessors_tolerate_malformed_documents() {
        let doc = EntityDocument::new(0, json!("not a mapping"));
        assert_eq!(doc.kind(), None);
        assert_eq!(doc.name(), None);

        let doc = EntityDocument::new(0, json!({"kind": 7, "metadata": []}));
        assert_eq!(doc.kind(), None);
        assert_eq!(doc.name(), None);
    }
}
