//! Document loading: one source file to zero or more entity documents
//!
//! Catalog files are YAML by convention and may hold several documents
//! separated by `---` markers; `.json` files hold a single document. Both
//! are normalized to `serde_json::Value` trees so the evaluator sees one
//! representation.
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::document::EntityDocument;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Supported serialization formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML, possibly multi-document (.yaml, .yml, and the default)
    Yaml,
    /// JSON, single document (.json)
    Json,
}

impl Format {
    /// Detect format from the file extension. Anything that is not `.json`
    /// is treated as YAML, which is a superset of JSON anyway.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Yaml,
        }
    }
}

/// Read a file and parse it into entity documents
pub fn load_path(path: &Path) -> Result<Vec<EntityDocument>> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read source file");
    parse_content(path, &content, Format::from_path(path))
}

/// Parse in-memory content into entity documents
pub fn parse_content(origin: &Path, content: &str, format: Format) -> Result<Vec<EntityDocument>> {
    let values = match format {
        Format::Yaml => parse_yaml(origin, content)?,
        Format::Json => vec![parse_json(origin, content)?],
    };
    debug!(origin = %origin.display(), documents = values.len(), "parsed source");
    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| EntityDocument::new(index, value))
        .collect())
}

/// Parse YAML content, splitting on document markers. Empty documents
/// (for example a trailing `---`) are dropped; they are separators, not
/// entities.
fn parse_yaml(origin: &Path, content: &str) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        let yaml: serde_yaml::Value =
            serde_yaml::Value::deserialize(document).map_err(|e| Error::parse(origin, e))?;
        if yaml.is_null() {
            continue;
        }
        // Convert to a JSON tree for uniform handling downstream
        values.push(serde_json::to_value(yaml).map_err(|e| Error::parse(origin, e))?);
    }
    Ok(values)
}

fn parse_json(origin: &Path, content: &str) -> Result<Value> {
    serde_json::from_str(content).map_err(|e| Error::parse(origin, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_path(Path::new("catalog-info.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("entities.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("entity.json")), Format::Json);
        // No extension or an odd one still parses as YAML
        assert_eq!(Format::from_path(Path::new("catalog-info")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("notes.txt")), Format::Yaml);
    }

    #[test]
    fn test_multi_document_yaml() {
        let content = r#"
apiVersion: backstage.io/v1alpha1
kind: Component
metadata:
  name: svc-a
---
apiVersion: backstage.io/v1alpha1
kind: API
metadata:
  name: svc-a-api
"#;
        let docs = parse_content(Path::new("catalog-info.yaml"), content, Format::Yaml).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].index(), 0);
        assert_eq!(docs[0].kind(), Some("Component"));
        assert_eq!(docs[1].index(), 1);
        assert_eq!(docs[1].kind(), Some("API"));
    }

    #[test]
    fn test_empty_documents_are_dropped() {
        let content = "---\nkind: Component\n---\n";
        let docs = parse_content(Path::new("x.yaml"), content, Format::Yaml).unwrap();
        assert_eq!(docs.len(), 1);
    }

    #[test]
    fn test_json_single_document() {
        let content = r#"{"kind": "Component", "metadata": {"name": "svc-a"}}"#;
        let docs = parse_content(Path::new("x.json"), content, Format::Json).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].value(), &json!({"kind": "Component", "metadata": {"name": "svc-a"}}));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let content = "kind: Component\n  bad indent: [unclosed";
        let err = parse_content(Path::new("x.yaml"), content, Format::Yaml).unwrap_err();
        assert!(err.is_load_error());
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let err = load_path(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.is_load_error());
    }
}
