use graphql_parser::Pos;
use indexmap::IndexMap;

use crate::ast::static_graphql as ast;
use crate::directives::{DeprecatedDirective, SpecifiedByDirective};
use crate::schema::{EnumValueConfig, FieldConfig, InputValueConfig, NamedType};

fn deprecation(reason: &Option<String>) -> Vec<ast::Directive> {
    reason
        .as_deref()
        .map(DeprecatedDirective::to_directive)
        .into_iter()
        .collect()
}

fn input_values_to_ast(values: &IndexMap<String, InputValueConfig>) -> Vec<ast::InputValue> {
    values
        .iter()
        .map(|(name, value)| ast::InputValue {
            position: Pos::default(),
            description: value.description.clone(),
            name: name.clone(),
            value_type: value.value_type.clone(),
            default_value: value.default_value.clone(),
            directives: deprecation(&value.deprecation_reason),
        })
        .collect()
}

fn fields_to_ast(fields: &IndexMap<String, FieldConfig>) -> Vec<ast::Field> {
    fields
        .iter()
        .map(|(name, field)| ast::Field {
            position: Pos::default(),
            description: field.description.clone(),
            name: name.clone(),
            arguments: input_values_to_ast(&field.args),
            field_type: field.field_type.clone(),
            directives: deprecation(&field.deprecation_reason),
        })
        .collect()
}

fn enum_values_to_ast(values: &IndexMap<String, EnumValueConfig>) -> Vec<ast::EnumValue> {
    values
        .iter()
        .map(|(name, value)| ast::EnumValue {
            position: Pos::default(),
            description: value.description.clone(),
            name: name.clone(),
            directives: deprecation(&value.deprecation_reason),
        })
        .collect()
}

impl NamedType {
    /// Renders the type from its configuration (not from its AST node), the way a
    /// schema printer would.
    pub fn to_definition(&self) -> ast::TypeDefinition {
        match self {
            NamedType::Object(object) => ast::TypeDefinition::Object(ast::ObjectType {
                position: Pos::default(),
                description: object.description.clone(),
                name: object.name.clone(),
                implements_interfaces: object.interfaces.clone(),
                directives: vec![],
                fields: fields_to_ast(&object.fields),
            }),
            NamedType::Interface(interface) => {
                ast::TypeDefinition::Interface(ast::InterfaceType {
                    position: Pos::default(),
                    description: interface.description.clone(),
                    name: interface.name.clone(),
                    implements_interfaces: interface.interfaces.clone(),
                    directives: vec![],
                    fields: fields_to_ast(&interface.fields),
                })
            }
            NamedType::InputObject(input_object) => {
                ast::TypeDefinition::InputObject(ast::InputObjectType {
                    position: Pos::default(),
                    description: input_object.description.clone(),
                    name: input_object.name.clone(),
                    directives: vec![],
                    fields: input_values_to_ast(&input_object.fields),
                })
            }
            NamedType::Union(union) => ast::TypeDefinition::Union(ast::UnionType {
                position: Pos::default(),
                description: union.description.clone(),
                name: union.name.clone(),
                directives: vec![],
                types: union.types.clone(),
            }),
            NamedType::Enum(enum_) => ast::TypeDefinition::Enum(ast::EnumType {
                position: Pos::default(),
                description: enum_.description.clone(),
                name: enum_.name.clone(),
                directives: vec![],
                values: enum_values_to_ast(&enum_.values),
            }),
            NamedType::Scalar(scalar) => ast::TypeDefinition::Scalar(ast::ScalarType {
                position: Pos::default(),
                description: scalar.description.clone(),
                name: scalar.name.clone(),
                directives: scalar
                    .specified_by_url
                    .as_deref()
                    .map(SpecifiedByDirective::to_directive)
                    .into_iter()
                    .collect(),
            }),
        }
    }
}

/// Prints the given types as an SDL document, in iteration order.
pub fn print_types<'a>(types: impl IntoIterator<Item = &'a NamedType>) -> String {
    let document = ast::Document {
        definitions: types
            .into_iter()
            .map(|named_type| ast::Definition::TypeDefinition(named_type.to_definition()))
            .collect(),
    };

    document.to_string()
}
