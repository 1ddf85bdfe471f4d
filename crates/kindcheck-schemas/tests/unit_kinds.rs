//! Round-trip coverage for the built-in kind table: a minimally valid
//! document of every kind validates cleanly, and knocking out a required
//! field is always diagnosed.
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use kindcheck_schemas::{evaluate, SchemaRegistry};
use serde_json::{json, Value};

fn minimal(kind: &str, spec: Value) -> Value {
    json!({
        "apiVersion": "backstage.io/v1alpha1",
        "kind": kind,
        "metadata": {"name": "sample"},
        "spec": spec
    })
}

fn minimal_documents() -> Vec<Value> {
    vec![
        minimal(
            "Component",
            json!({"type": "service", "lifecycle": "production", "owner": "team-x"}),
        ),
        minimal(
            "API",
            json!({
                "type": "openapi",
                "lifecycle": "production",
                "owner": "team-x",
                "definition": "openapi: \"3.0.0\""
            }),
        ),
        minimal("Resource", json!({"type": "database", "owner": "team-x"})),
        minimal("System", json!({"owner": "team-x"})),
        minimal("Domain", json!({"owner": "team-x"})),
        minimal("Location", json!({"type": "url", "target": "./catalog-info.yaml"})),
        minimal("User", json!({"memberOf": ["team-x"]})),
        minimal("Group", json!({"type": "team", "children": []})),
        minimal(
            "Template",
            json!({"type": "service", "steps": [{"id": "fetch", "action": "fetch:template"}]}),
        ),
    ]
}

#[test]
fn every_builtin_kind_has_a_minimal_valid_document() {
    let documents = minimal_documents();
    assert_eq!(documents.len(), SchemaRegistry::global().kinds().len());

    for doc in documents {
        let evaluation = evaluate(&doc);
        assert!(
            evaluation.pass(),
            "kind {}: {:?}",
            doc["kind"],
            evaluation.violations
        );
    }
}

#[test]
fn dropping_a_required_field_is_always_diagnosed() {
    for mut doc in minimal_documents() {
        let kind = doc["kind"].as_str().unwrap().to_string();
        let schema = SchemaRegistry::global().schema_for(&kind).unwrap();
        let Some(first_required) = schema.required.first() else {
            continue;
        };

        doc["spec"].as_object_mut().unwrap().remove(*first_required);
        let evaluation = evaluate(&doc);
        let expected_path = format!("spec.{}", first_required);
        assert!(
            evaluation.violations.iter().any(|v| v.path == expected_path),
            "kind {}: expected a violation at {}, got {:?}",
            kind,
            expected_path,
            evaluation.violations
        );
    }
}

#[test]
fn richer_component_still_validates() {
    let mut doc = minimal(
        "Component",
        json!({
            "type": "website",
            "lifecycle": "experimental",
            "owner": "team-x",
            "system": "storefront",
            "providesApis": ["orders-api"],
            "dependsOn": ["resource:orders-db"]
        }),
    );
    doc["metadata"]["namespace"] = json!("shop");
    doc["metadata"]["labels"] = json!({"tier": "1"});
    doc["metadata"]["annotations"] = json!({"backstage.io/managed-by": "argocd"});
    doc["metadata"]["tags"] = json!(["rust", "storefront"]);

    let evaluation = evaluate(&doc);
    assert!(evaluation.pass(), "{:?}", evaluation.violations);
}

#[test]
fn yaml_parsed_document_evaluates_like_json() {
    let yaml = r#"
apiVersion: backstage.io/v1alpha1
kind: Component
metadata:
  name: svc-a
spec:
  type: service
  lifecycle: production
  owner: team-x
"#;
    let parsed: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
    let doc = serde_json::to_value(parsed).unwrap();
    assert!(evaluate(&doc).pass());
}
