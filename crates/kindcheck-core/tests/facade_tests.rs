//! End-to-end tests for the validation facade, file-backed via tempfile
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use kindcheck_core::{validate_file, validate_source, Error};
use std::fs;
use tempfile::tempdir;

const VALID_COMPONENT: &str = r#"
apiVersion: backstage.io/v1alpha1
kind: Component
metadata:
  name: svc-a
spec:
  type: service
  lifecycle: production
  owner: team-x
"#;

#[test]
fn valid_file_returns_report() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog-info.yaml");
    fs::write(&path, VALID_COMPONENT).unwrap();

    let report = validate_file(&path, false).unwrap();
    assert!(report.pass());
    assert_eq!(report.document_count(), 1);
    assert_eq!(report.documents[0].label(), "Component svc-a");
}

#[test]
fn missing_metadata_fails_with_enumerated_violation() {
    // A document with no metadata must surface that violation in the
    // validation error's message.
    let content = r#"
apiVersion: backstage.io/v1alpha1
kind: Component
spec:
  type: service
  lifecycle: production
  owner: team-x
"#;
    let err = validate_source("catalog-info.yaml", content, false).unwrap_err();
    assert!(!err.is_load_error());
    assert!(err.to_string().contains("metadata: required field is missing"));

    let report = err.report().unwrap();
    assert!(!report.pass());
    assert_eq!(report.violation_count(), 1);
}

#[test]
fn second_document_failure_is_attributed_to_its_index() {
    // One valid Component, one missing spec.type: exactly one violation,
    // attributed to document 1.
    let content = format!(
        "{}---\napiVersion: backstage.io/v1alpha1\nkind: Component\nmetadata:\n  name: svc-b\nspec:\n  lifecycle: production\n  owner: team-x\n",
        VALID_COMPONENT
    );

    let err = validate_source("catalog-info.yaml", &content, false).unwrap_err();
    let report = err.report().unwrap();
    assert_eq!(report.document_count(), 2);
    assert_eq!(report.violation_count(), 1);
    assert!(report.documents[0].pass());
    assert_eq!(report.documents[1].index, 1);
    assert_eq!(report.documents[1].violations[0].path, "spec.type");
    assert!(err
        .to_string()
        .contains("catalog-info.yaml: document 1: spec.type"));
}

#[test]
fn unreadable_file_is_a_load_error_not_a_validation_error() {
    let err = validate_file("no/such/catalog-info.yaml", false).unwrap_err();
    assert!(err.is_load_error());
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn malformed_yaml_is_a_load_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "kind: [unclosed\n  nope: {").unwrap();

    let err = validate_file(&path, false).unwrap_err();
    assert!(err.is_load_error());
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn json_sources_are_supported() {
    let content = r#"{
        "apiVersion": "backstage.io/v1alpha1",
        "kind": "Component",
        "metadata": {"name": "svc-a"},
        "spec": {"type": "service", "lifecycle": "production", "owner": "team-x"}
    }"#;
    let report = validate_source("entity.json", content, false).unwrap();
    assert!(report.pass());
}

#[test]
fn verbose_flag_never_changes_the_outcome() {
    for verbose in [false, true] {
        let report = validate_source("x.yaml", VALID_COMPONENT, verbose).unwrap();
        assert!(report.pass());
        assert!(report.documents[0].checks_passed > 0);
        assert_eq!(
            report.documents[0].checks_passed,
            report.documents[0].checks_total
        );
    }
}

#[test]
fn repeated_calls_are_independent() {
    // Stateless facade: same input, same result, call after call
    let first = validate_source("x.yaml", VALID_COMPONENT, false).unwrap();
    let second = validate_source("x.yaml", VALID_COMPONENT, false).unwrap();
    assert_eq!(first.document_count(), second.document_count());
    assert_eq!(first.violation_count(), second.violation_count());
}

#[test]
fn concurrent_validations_do_not_interfere() {
    let bad = "kind: 7\n";
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                if i % 2 == 0 {
                    validate_source("even.yaml", VALID_COMPONENT, false).is_ok()
                } else {
                    validate_source("odd.yaml", bad, false).is_err()
                }
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
