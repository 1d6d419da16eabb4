use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::ast::ext::TypeExt;
use crate::candidates::TypeCandidate;
use crate::config::TypeMergingOptions;
use crate::error::TypeMergingError;
use crate::merger::TypeMerger;
use crate::schema::{Extensions, NamedType};
use crate::tests::testkit::{candidates_of, init_logger, merge_type, subgraph};

#[test]
fn single_candidate_is_returned_unchanged() {
    init_logger();
    let sources = vec![subgraph(
        "accounts",
        r#"
        "A user"
        type User implements Node {
          id: ID!
          name(format: String = "full"): String @deprecated(reason: "use fullName")
        }
        "#,
    )];
    let candidates = candidates_of(&sources, "User");

    let merged = TypeMerger::default()
        .merge_type_candidates("User", &candidates)
        .expect("single candidate always merges");

    assert_eq!(&merged, candidates[0].type_def.as_ref());
}

#[test]
fn last_description_wins_without_canonical() {
    init_logger();
    let sources = vec![
        subgraph("a", r#""a" type User { id: ID! }"#),
        subgraph("b", r#""b" type User { id: ID! }"#),
        subgraph("c", r#""c" type User { id: ID! }"#),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "User").expect("merges");

    assert_eq!(merged.description(), Some("c"));
}

#[test]
fn canonical_type_wins_over_later_candidates() {
    init_logger();
    let sources = vec![
        subgraph("a", r#""a" type User @canonical { id: ID! name: String }"#),
        subgraph("b", r#""b" type User { id: ID! name: String! }"#),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "User").expect("merges");

    assert_eq!(merged.description(), Some("a"));
    let name = &merged.fields().expect("object has fields")["name"];
    assert!(!name.field_type.is_non_null());
}

fn with_extensions(
    candidate: &TypeCandidate,
    entries: &[(&str, serde_json::Value)],
) -> TypeCandidate {
    let mut object = candidate.type_def.as_object().expect("object").clone();
    object.extensions = entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect::<Extensions>();

    TypeCandidate::new(
        Arc::new(NamedType::Object(object)),
        candidate.subschema.clone(),
        candidate.transformed_subschema.clone(),
    )
}

#[test]
fn canonical_type_declared_first_still_wins() {
    init_logger();
    let sources = vec![
        subgraph("a", r#""from a" type User @canonical { id: ID! }"#),
        subgraph("b", r#""from b" type User { id: ID! }"#),
    ];
    let parsed = candidates_of(&sources, "User");
    let candidates = vec![
        with_extensions(&parsed[0], &[("owner", json!("a")), ("cost", json!(1))]),
        with_extensions(&parsed[1], &[("owner", json!("b")), ("cached", json!(true))]),
    ];

    let merged = TypeMerger::default()
        .merge_type_candidates("User", &candidates)
        .expect("merges");

    assert_eq!(merged.description(), Some("from a"));
    assert_eq!(merged.extensions()["owner"], json!("a"));
    assert_eq!(merged.extensions()["cost"], json!(1));
    assert_eq!(merged.extensions()["cached"], json!(true));

    let node = merged
        .as_object()
        .and_then(|object| object.ast_node.as_ref())
        .expect("merged ast node");
    assert_eq!(node.description.as_deref(), Some("from a"));
}

#[test]
fn canonical_candidate_is_ordered_last() {
    let sources = vec![
        subgraph("a", "type User @canonical { id: ID! }"),
        subgraph("b", "type User { id: ID! }"),
        subgraph("c", "type User { id: ID! }"),
    ];
    let candidates = candidates_of(&sources, "User");

    let ordered = TypeMerger::default()
        .ordered_candidates(&candidates)
        .expect("one canonical candidate");

    let subgraphs: Vec<&str> = ordered.iter().map(|c| c.subgraph_name()).collect();
    assert_eq!(subgraphs, vec!["b", "c", "a"]);
}

#[test]
fn two_canonical_types_are_rejected() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User @canonical { id: ID! }"),
        subgraph("b", "type User @canonical { id: ID! }"),
    ];

    let err = merge_type(TypeMergingOptions::default(), &sources, "User")
        .expect_err("only one subgraph may be canonical");

    assert!(matches!(
        &err,
        TypeMergingError::MultipleCanonicalDefinitions(name) if name == "User"
    ));
    assert_eq!(err.to_string(), r#"Multiple canonical definitions for "User""#);
}

#[test]
fn canonical_field_wins_over_canonical_type() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User @canonical { id: ID! name: String }"),
        subgraph("b", "type User { id: ID! name: String! @canonical }"),
        subgraph("c", "type User { id: ID! name: String }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "User").expect("merges");

    let name = &merged.fields().expect("object has fields")["name"];
    assert!(name.field_type.is_non_null());
}

#[test]
fn two_canonical_fields_are_rejected() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String @canonical }"),
        subgraph("b", "type User { id: ID! name: String @canonical }"),
    ];

    let err = merge_type(TypeMergingOptions::default(), &sources, "User")
        .expect_err("only one subgraph may own the field");

    assert_eq!(err.coordinate(), Some("User.name"));
}

#[test]
fn canonical_input_field_is_selected() {
    init_logger();
    let sources = vec![
        subgraph("a", "input ReviewFilter { rating: Int @canonical }"),
        subgraph("b", "input ReviewFilter { rating: Float }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "ReviewFilter")
        .expect("merges");

    let input_object = merged.as_input_object().expect("input object");
    assert_eq!(input_object.fields["rating"].value_type.inner_type(), "Int");
}

#[test]
fn enum_values_follow_the_canonical_type() {
    init_logger();
    let sources = vec![
        subgraph(
            "a",
            r#"enum Status @canonical { ACTIVE @deprecated(reason: "use ENABLED") }"#,
        ),
        subgraph("b", "enum Status { ACTIVE }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "Status").expect("merges");

    let enum_type = merged.as_enum().expect("enum");
    assert_eq!(
        enum_type.values["ACTIVE"].deprecation_reason.as_deref(),
        Some("use ENABLED")
    );
}
