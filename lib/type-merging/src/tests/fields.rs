use pretty_assertions::assert_eq;
use serde_json::json;

use crate::ast::ext::TypeExt;
use crate::ast::static_graphql::Type;
use crate::config::{TypeMergingOptions, ValidationLevel};
use crate::merger::TypeMerger;
use crate::schema::{Extensions, FieldConfig, NamedType, ObjectType};
use crate::tests::testkit::{
    candidate, init_logger, merge_type, subgraph, with_validation_level,
};

#[test]
fn fields_are_unioned_in_candidate_order() {
    init_logger();
    let sources = vec![
        subgraph("a", "type Product { upc: String! name: String }"),
        subgraph("b", "type Product { upc: String! price: Int }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "Product").expect("merges");

    let field_names: Vec<&str> = merged
        .fields()
        .expect("object has fields")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(field_names, vec!["upc", "name", "price"]);
}

#[test]
fn conflicting_nullability_keeps_last_definition_by_default() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String }"),
        subgraph("b", "type User { id: ID! name: String! }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "User").expect("merges");

    let name = &merged.fields().expect("object has fields")["name"];
    assert!(name.field_type.is_non_null());
}

#[test]
fn conflicting_nullability_is_relaxed_when_enabled() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String }"),
        subgraph("b", "type User { id: ID! name: String! }"),
    ];
    let options = TypeMergingOptions {
        use_non_nullable_field_on_conflict: true,
        ..with_validation_level(ValidationLevel::Error)
    };

    let merged = merge_type(options, &sources, "User").expect("relaxed field is consistent");

    let object = merged.as_object().expect("object");
    let name = &object.fields["name"];
    assert!(!name.field_type.is_non_null());
    assert!(!name
        .ast_node
        .as_ref()
        .expect("field parsed from sdl")
        .field_type
        .is_non_null());
    assert!(object.fields["id"].field_type.is_non_null());

    let type_node = object.ast_node.as_ref().expect("type parsed from sdl");
    let name_node = type_node
        .fields
        .iter()
        .find(|field| field.name == "name")
        .expect("merged node has the field");
    assert!(!name_node.field_type.is_non_null());
}

#[test]
fn interfaces_are_unioned() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User implements Node { id: ID! }"),
        subgraph("b", "type User implements Entity & Node { id: ID! }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "User").expect("merges");

    assert_eq!(
        merged.as_object().expect("object").interfaces,
        vec!["Node".to_string(), "Entity".to_string()]
    );
}

#[test]
fn interface_types_merge_their_fields() {
    init_logger();
    let sources = vec![
        subgraph("a", "interface Node { id: ID! }"),
        subgraph("b", "interface Node { id: ID! createdAt: String }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "Node").expect("merges");

    let interface = merged.as_interface().expect("interface");
    let field_names: Vec<&str> = interface.fields.keys().map(String::as_str).collect();
    assert_eq!(field_names, vec!["id", "createdAt"]);
}

#[test]
fn merged_ast_node_carries_every_merged_field() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! }"),
        subgraph("b", "type User { name: String }"),
    ];

    let merged = merge_type(TypeMergingOptions::default(), &sources, "User").expect("merges");

    let node = merged
        .as_object()
        .and_then(|object| object.ast_node.as_ref())
        .expect("merged ast node");
    let field_names: Vec<&str> = node.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(field_names, vec!["id", "name"]);
}

#[test]
fn extensions_are_merged_shallowly() {
    init_logger();
    let extensions = |entries: &[(&str, serde_json::Value)]| -> Extensions {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    };
    let first = ObjectType {
        extensions: extensions(&[("owner", json!("accounts")), ("cost", json!(1))]),
        fields: [("id".to_string(), FieldConfig::new(id_type()))]
            .into_iter()
            .collect(),
        ..ObjectType::new("User")
    };
    let second = ObjectType {
        extensions: extensions(&[("cost", json!(5)), ("cached", json!(true))]),
        fields: [("id".to_string(), FieldConfig::new(id_type()))]
            .into_iter()
            .collect(),
        ..ObjectType::new("User")
    };
    let candidates = vec![
        candidate("a", NamedType::Object(first), None),
        candidate("b", NamedType::Object(second), None),
    ];

    let merged = TypeMerger::default()
        .merge_type_candidates("User", &candidates)
        .expect("merges");

    assert_eq!(
        merged.extensions(),
        &extensions(&[
            ("owner", json!("accounts")),
            ("cost", json!(5)),
            ("cached", json!(true)),
        ])
    );
    let keys: Vec<&str> = merged.extensions().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["owner", "cost", "cached"]);
    assert!(merged
        .as_object()
        .expect("object")
        .ast_node
        .is_none());
}

fn id_type() -> Type {
    Type::NonNullType(Box::new(Type::NamedType("ID".to_string())))
}
