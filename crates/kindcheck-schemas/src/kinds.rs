//! Built-in kind table for the Backstage catalog model
//!
//! Rules follow the `backstage.io/v1alpha1` entity reference. Each entry is
//! pure data: required `spec` fields, per-field shapes, closed vocabularies
//! where the format defines one, and any-of presence groups.
//!
//! Copyright (c) 2025 Kindcheck Team
//! Licensed under the MIT OR Apache-2.0 license

use crate::registry::{FieldRule, KindSchema, Shape};

/// Well-known lifecycle stages for Component and API entities
pub const LIFECYCLES: &[&str] = &["experimental", "production", "deprecated"];

/// Well-known API definition formats
pub const API_TYPES: &[&str] = &["openapi", "asyncapi", "graphql", "grpc"];

/// The full built-in kind table, in the order kinds are reported to users
pub fn builtin_schemas() -> Vec<KindSchema> {
    vec![
        KindSchema {
            kind: "Component",
            required: &["type", "lifecycle", "owner"],
            fields: const {
                &[
                    // Component types are an open vocabulary, so no allowed set
                    FieldRule::of("type", Shape::String),
                    FieldRule::one_of("lifecycle", LIFECYCLES),
                    FieldRule::of("owner", Shape::String),
                    FieldRule::of("system", Shape::String),
                    FieldRule::of("subcomponentOf", Shape::String),
                    FieldRule::of("providesApis", Shape::Sequence),
                    FieldRule::of("consumesApis", Shape::Sequence),
                    FieldRule::of("dependsOn", Shape::Sequence),
                ]
            },
            any_of: &[],
        },
        KindSchema {
            kind: "API",
            required: &["type", "lifecycle", "owner", "definition"],
            fields: const {
                &[
                    FieldRule::one_of("type", API_TYPES),
                    FieldRule::one_of("lifecycle", LIFECYCLES),
                    FieldRule::of("owner", Shape::String),
                    FieldRule::of("definition", Shape::String),
                    FieldRule::of("system", Shape::String),
                ]
            },
            any_of: &[],
        },
        KindSchema {
            kind: "Resource",
            required: &["type", "owner"],
            fields: const {
                &[
                    FieldRule::of("type", Shape::String),
                    FieldRule::of("owner", Shape::String),
                    FieldRule::of("system", Shape::String),
                    FieldRule::of("dependsOn", Shape::Sequence),
                ]
            },
            any_of: &[],
        },
        KindSchema {
            kind: "System",
            required: &["owner"],
            fields: const {
                &[
                    FieldRule::of("owner", Shape::String),
                    FieldRule::of("domain", Shape::String),
                ]
            },
            any_of: &[],
        },
        KindSchema {
            kind: "Domain",
            required: &["owner"],
            fields: const { &[FieldRule::of("owner", Shape::String)] },
            any_of: &[],
        },
        KindSchema {
            kind: "Location",
            required: &[],
            fields: const {
                &[
                    FieldRule::of("type", Shape::String),
                    FieldRule::of("target", Shape::String),
                    FieldRule::of("targets", Shape::Sequence),
                ]
            },
            // A location must point somewhere, singular or plural form
            any_of: &[&["targets", "target"]],
        },
        KindSchema {
            kind: "User",
            required: &["memberOf"],
            fields: const {
                &[
                    FieldRule::of("memberOf", Shape::Sequence),
                    FieldRule::of("profile", Shape::Mapping),
                ]
            },
            any_of: &[],
        },
        KindSchema {
            kind: "Group",
            required: &["type", "children"],
            fields: const {
                &[
                    FieldRule::of("type", Shape::String),
                    FieldRule::of("children", Shape::Sequence),
                    FieldRule::of("members", Shape::Sequence),
                    FieldRule::of("parent", Shape::String),
                    FieldRule::of("profile", Shape::Mapping),
                ]
            },
            any_of: &[],
        },
        KindSchema {
            kind: "Template",
            required: &["type", "steps"],
            fields: const {
                &[
                    FieldRule::of("type", Shape::String),
                    FieldRule::of("steps", Shape::Sequence),
                    FieldRule::of("owner", Shape::String),
                    FieldRule::of("output", Shape::Mapping),
                ]
            },
            any_of: &[],
        },
    ]
}
