//! Folding of type definition AST nodes coming from different subgraphs.
//!
//! Merging here never fails: when two nodes disagree on a field, the incoming
//! (later) node wins. Field-level conflicts are reported by the field mergers and
//! validators, the AST only has to reflect the outcome for printing and introspection.

use crate::ast::static_graphql::{
    Directive, EnumType, EnumValue, Field, InputObjectType, InputValue, InterfaceType,
    ObjectType, ScalarType, UnionType,
};

pub trait AstNodeMerge: Sized {
    /// Merges `self` (the later node) onto `existing`.
    fn merge_onto(&self, existing: Self) -> Self;
}

/// Folds every node onto the first one, in order. Returns `None` for an empty list.
pub fn fold_ast_nodes<N: AstNodeMerge>(nodes: Vec<N>) -> Option<N> {
    nodes
        .into_iter()
        .reduce(|existing, node| node.merge_onto(existing))
}

pub fn merge_directives(incoming: &[Directive], existing: &[Directive]) -> Vec<Directive> {
    let mut result = existing.to_vec();

    for directive in incoming {
        if !result.contains(directive) {
            result.push(directive.clone());
        }
    }

    result
}

pub fn merge_named_types(incoming: &[String], existing: &[String]) -> Vec<String> {
    let mut result = existing.to_vec();

    for name in incoming {
        if !result.contains(name) {
            result.push(name.clone());
        }
    }

    result
}

pub fn merge_input_values(incoming: &[InputValue], existing: &[InputValue]) -> Vec<InputValue> {
    let mut result = existing.to_vec();

    for value in incoming {
        match result.iter_mut().find(|current| current.name == value.name) {
            Some(current) => {
                current.position = value.position;
                current.value_type = value.value_type.clone();
                current.default_value = value
                    .default_value
                    .clone()
                    .or_else(|| current.default_value.take());
                current.directives = merge_directives(&value.directives, &current.directives);
                current.description = value
                    .description
                    .clone()
                    .or_else(|| current.description.take());
            }
            None => result.push(value.clone()),
        }
    }

    result
}

pub fn merge_fields(incoming: &[Field], existing: &[Field]) -> Vec<Field> {
    let mut result = existing.to_vec();

    for field in incoming {
        match result.iter_mut().find(|current| current.name == field.name) {
            Some(current) => {
                current.position = field.position;
                current.field_type = field.field_type.clone();
                current.arguments = merge_input_values(&field.arguments, &current.arguments);
                current.directives = merge_directives(&field.directives, &current.directives);
                current.description = field
                    .description
                    .clone()
                    .or_else(|| current.description.take());
            }
            None => result.push(field.clone()),
        }
    }

    result
}

pub fn merge_enum_values(incoming: &[EnumValue], existing: &[EnumValue]) -> Vec<EnumValue> {
    let mut result = existing.to_vec();

    for value in incoming {
        match result.iter_mut().find(|current| current.name == value.name) {
            Some(current) => {
                current.position = value.position;
                current.directives = merge_directives(&value.directives, &current.directives);
                current.description = value
                    .description
                    .clone()
                    .or_else(|| current.description.take());
            }
            None => result.push(value.clone()),
        }
    }

    result
}

impl AstNodeMerge for ObjectType {
    fn merge_onto(&self, existing: Self) -> Self {
        ObjectType {
            position: self.position,
            description: self.description.clone().or(existing.description),
            name: self.name.clone(),
            implements_interfaces: merge_named_types(
                &self.implements_interfaces,
                &existing.implements_interfaces,
            ),
            directives: merge_directives(&self.directives, &existing.directives),
            fields: merge_fields(&self.fields, &existing.fields),
        }
    }
}

impl AstNodeMerge for InterfaceType {
    fn merge_onto(&self, existing: Self) -> Self {
        InterfaceType {
            position: self.position,
            description: self.description.clone().or(existing.description),
            name: self.name.clone(),
            implements_interfaces: merge_named_types(
                &self.implements_interfaces,
                &existing.implements_interfaces,
            ),
            directives: merge_directives(&self.directives, &existing.directives),
            fields: merge_fields(&self.fields, &existing.fields),
        }
    }
}

impl AstNodeMerge for InputObjectType {
    fn merge_onto(&self, existing: Self) -> Self {
        InputObjectType {
            position: self.position,
            description: self.description.clone().or(existing.description),
            name: self.name.clone(),
            directives: merge_directives(&self.directives, &existing.directives),
            fields: merge_input_values(&self.fields, &existing.fields),
        }
    }
}

impl AstNodeMerge for UnionType {
    fn merge_onto(&self, existing: Self) -> Self {
        UnionType {
            position: self.position,
            description: self.description.clone().or(existing.description),
            name: self.name.clone(),
            directives: merge_directives(&self.directives, &existing.directives),
            types: merge_named_types(&self.types, &existing.types),
        }
    }
}

impl AstNodeMerge for EnumType {
    fn merge_onto(&self, existing: Self) -> Self {
        EnumType {
            position: self.position,
            description: self.description.clone().or(existing.description),
            name: self.name.clone(),
            directives: merge_directives(&self.directives, &existing.directives),
            values: merge_enum_values(&self.values, &existing.values),
        }
    }
}

impl AstNodeMerge for ScalarType {
    fn merge_onto(&self, existing: Self) -> Self {
        ScalarType {
            position: self.position,
            description: self.description.clone().or(existing.description),
            name: self.name.clone(),
            directives: merge_directives(&self.directives, &existing.directives),
        }
    }
}

#[cfg(test)]
mod tests {
    use graphql_parser::schema::{Definition, TypeDefinition};

    use super::*;
    use crate::ast::ext::TypeExt;

    fn object_node(sdl: &str) -> ObjectType {
        let document = graphql_parser::parse_schema::<String>(sdl)
            .expect("failed to parse sdl")
            .into_static();
        match document.definitions.into_iter().next() {
            Some(Definition::TypeDefinition(TypeDefinition::Object(object))) => object,
            _ => panic!("expected an object type definition"),
        }
    }

    #[test]
    fn later_field_type_wins_and_new_fields_are_appended() {
        let first = object_node("type User implements Node { id: ID! name: String }");
        let second = object_node("type User implements Named { name: String! email: String }");

        let merged = fold_ast_nodes(vec![first, second]).expect("nodes to fold");

        let names: Vec<&str> = merged.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "email"]);
        assert!(merged.fields[1].field_type.is_non_null());
        assert_eq!(
            merged.implements_interfaces,
            vec!["Node".to_string(), "Named".to_string()]
        );
    }

    #[test]
    fn description_falls_back_to_existing_node() {
        let first = object_node("\"users\" type User { id: ID! }");
        let second = object_node("type User { id: ID! }");

        let merged = fold_ast_nodes(vec![first, second]).expect("nodes to fold");

        assert_eq!(merged.description.as_deref(), Some("users"));
    }

    #[test]
    fn identical_directives_are_not_duplicated() {
        let first = object_node("type User @key(fields: \"id\") { id: ID! }");
        let second = object_node("type User @key(fields: \"id\") @shareable { id: ID! }");

        let merged = fold_ast_nodes(vec![first, second]).expect("nodes to fold");

        let names: Vec<&str> = merged.directives.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["key", "shareable"]);
    }
}
