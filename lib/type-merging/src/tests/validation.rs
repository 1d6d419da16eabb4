use std::collections::HashMap;

use crate::config::{TypeMergingOptions, ValidationLevel, ValidationSettings};
use crate::error::TypeMergingError;
use crate::tests::testkit::{init_logger, merge_type, subgraph, with_validation_level};

#[test]
fn nullability_conflict_is_an_error_at_error_level() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String }"),
        subgraph("b", "type User { id: ID! name: String! }"),
    ];

    let err = merge_type(with_validation_level(ValidationLevel::Error), &sources, "User")
        .expect_err("merged field is non-null but nullable in a");

    assert!(matches!(err, TypeMergingError::FieldConsistency { .. }));
    assert_eq!(err.coordinate(), Some("User.name"));
    assert!(err
        .to_string()
        .contains(r#"validation_scopes["User.name"].validation_level"#));
}

#[test]
fn nullability_conflict_is_only_logged_by_default() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String }"),
        subgraph("b", "type User { id: ID! name: String! }"),
    ];

    assert!(merge_type(TypeMergingOptions::default(), &sources, "User").is_ok());
}

#[test]
fn validation_scope_silences_a_single_field() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String }"),
        subgraph("b", "type User { id: ID! name: String! }"),
    ];
    let mut options = with_validation_level(ValidationLevel::Error);
    options.validation_scopes.insert(
        "User.name".to_string(),
        ValidationSettings {
            validation_level: Some(ValidationLevel::Off),
            ..Default::default()
        },
    );

    assert!(merge_type(options, &sources, "User").is_ok());
}

#[test]
fn strict_null_comparison_reports_any_difference() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: ID! name: String! }"),
        subgraph("b", "type User { id: ID! name: String }"),
    ];
    let lenient = with_validation_level(ValidationLevel::Error);
    assert!(merge_type(lenient.clone(), &sources, "User").is_ok());

    let mut strict = lenient;
    strict.validation_settings.strict_null_comparison = Some(true);
    let err = merge_type(strict, &sources, "User").expect_err("nullability differs");
    assert_eq!(err.coordinate(), Some("User.name"));
}

#[test]
fn list_shape_mismatch_is_always_fatal() {
    init_logger();
    let sources = vec![
        subgraph("a", "type Product { tags: [String] }"),
        subgraph("b", "type Product { tags: String }"),
    ];

    let err = merge_type(with_validation_level(ValidationLevel::Off), &sources, "Product")
        .expect_err("list and non-list cannot be merged");

    assert!(matches!(
        err,
        TypeMergingError::FieldConsistency { ref coordinate, .. } if coordinate == "Product.tags"
    ));
}

#[test]
fn named_type_mismatch_respects_the_validation_level() {
    init_logger();
    let sources = vec![
        subgraph("a", "type Product { price: Int }"),
        subgraph("b", "type Product { price: Float }"),
    ];

    assert!(merge_type(TypeMergingOptions::default(), &sources, "Product").is_ok());
    assert!(merge_type(with_validation_level(ValidationLevel::Error), &sources, "Product").is_err());
}

#[test]
fn proxiable_scalars_are_accepted() {
    init_logger();
    let sources = vec![
        subgraph("a", "type User { id: String! }"),
        subgraph("b", "type User { id: ID! }"),
    ];
    let mut options = with_validation_level(ValidationLevel::Error);
    options.validation_settings.proxiable_scalars =
        HashMap::from([("ID".to_string(), vec!["String".to_string()])]);

    assert!(merge_type(options, &sources, "User").is_ok());
}

#[test]
fn proxiable_non_scalar_is_rejected() {
    init_logger();
    let sources = vec![
        subgraph("a", "type Review { id: ID! } type User { id: Review! }"),
        subgraph("b", "type User { id: ID! }"),
    ];
    let mut options = with_validation_level(ValidationLevel::Off);
    options.validation_settings.proxiable_scalars =
        HashMap::from([("ID".to_string(), vec!["Review".to_string()])]);

    let err = merge_type(options, &sources, "User").expect_err("Review is not a scalar");

    assert!(matches!(err, TypeMergingError::ProxiableScalarMismatch { .. }));
}

#[test]
fn omitted_arguments_are_reported() {
    init_logger();
    let sources = vec![
        subgraph("a", "type Query { users(first: Int): [String] }"),
        subgraph("b", "type Query { users: [String] }"),
    ];

    let err = merge_type(with_validation_level(ValidationLevel::Error), &sources, "Query")
        .expect_err("b omits the first argument");

    assert_eq!(err.coordinate(), Some("Query.users"));
}

#[test]
fn nullable_argument_over_non_null_one_is_reported() {
    init_logger();
    let sources = vec![
        subgraph("a", "type Query { user(id: ID!): String }"),
        subgraph("b", "type Query { user(id: ID): String }"),
    ];

    let err = merge_type(with_validation_level(ValidationLevel::Error), &sources, "Query")
        .expect_err("merged argument is nullable");

    assert_eq!(err.coordinate(), Some("Query.user.id"));
}

#[test]
fn input_enum_with_diverging_values_is_reported() {
    init_logger();
    let sources = vec![
        subgraph(
            "a",
            "enum Sort { ASC DESC } type Query { reviews(sort: Sort): [String] }",
        ),
        subgraph("b", "enum Sort { ASC } type Query { reviews(sort: Sort): [String] }"),
    ];

    let err = merge_type(with_validation_level(ValidationLevel::Error), &sources, "Query")
        .expect_err("Sort differs between subgraphs");

    assert_eq!(err.coordinate(), Some("Sort"));
}

#[test]
fn partial_input_object_is_reported() {
    init_logger();
    let sources = vec![
        subgraph("a", "input ProductFilter { name: String maxPrice: Int }"),
        subgraph("b", "input ProductFilter { name: String }"),
    ];

    let err = merge_type(
        with_validation_level(ValidationLevel::Error),
        &sources,
        "ProductFilter",
    )
    .expect_err("maxPrice is missing in b");

    assert!(matches!(
        err,
        TypeMergingError::InputObjectConsistency { ref coordinate, .. }
            if coordinate == "ProductFilter.maxPrice"
    ));
}

#[test]
fn nullable_input_field_over_non_null_one_is_reported() {
    init_logger();
    let sources = vec![
        subgraph("a", "input ProductFilter { name: String! }"),
        subgraph("b", "input ProductFilter { name: String }"),
    ];

    let err = merge_type(
        with_validation_level(ValidationLevel::Error),
        &sources,
        "ProductFilter",
    )
    .expect_err("merged input field is nullable");

    assert!(matches!(err, TypeMergingError::InputFieldConsistency { .. }));
    assert_eq!(err.coordinate(), Some("ProductFilter.name"));
}
