use indexmap::IndexMap;

use crate::ast::ext::TypeDefinitionExt;
use crate::ast::static_graphql as ast;
use crate::directives::{find_directive, DeprecatedDirective, SpecifiedByDirective};
use crate::schema::{
    EnumType, EnumValueConfig, FieldConfig, InputObjectType, InputValueConfig, InterfaceType,
    NamedType, ObjectType, ScalarType, TypeKind, UnionType,
};

fn deprecation_reason(directives: &[ast::Directive]) -> Option<String> {
    find_directive::<DeprecatedDirective>(directives).map(|d| d.reason)
}

fn fields_from_ast(fields: &[ast::Field]) -> IndexMap<String, FieldConfig> {
    fields
        .iter()
        .map(|field| (field.name.clone(), FieldConfig::from(field)))
        .collect()
}

fn input_values_from_ast(values: &[ast::InputValue]) -> IndexMap<String, InputValueConfig> {
    values
        .iter()
        .map(|value| (value.name.clone(), InputValueConfig::from(value)))
        .collect()
}

fn enum_values_from_ast(values: &[ast::EnumValue]) -> IndexMap<String, EnumValueConfig> {
    values
        .iter()
        .map(|value| (value.name.clone(), EnumValueConfig::from(value)))
        .collect()
}

fn append_names(target: &mut Vec<String>, names: &[String]) {
    for name in names {
        if !target.contains(name) {
            target.push(name.clone());
        }
    }
}

impl From<&ast::Field> for FieldConfig {
    fn from(field: &ast::Field) -> Self {
        Self {
            description: field.description.clone(),
            field_type: field.field_type.clone(),
            args: input_values_from_ast(&field.arguments),
            deprecation_reason: deprecation_reason(&field.directives),
            extensions: Default::default(),
            ast_node: Some(field.clone()),
        }
    }
}

impl From<&ast::InputValue> for InputValueConfig {
    fn from(value: &ast::InputValue) -> Self {
        Self {
            description: value.description.clone(),
            value_type: value.value_type.clone(),
            default_value: value.default_value.clone(),
            deprecation_reason: deprecation_reason(&value.directives),
            extensions: Default::default(),
            ast_node: Some(value.clone()),
        }
    }
}

impl From<&ast::EnumValue> for EnumValueConfig {
    fn from(value: &ast::EnumValue) -> Self {
        Self {
            description: value.description.clone(),
            value: None,
            deprecation_reason: deprecation_reason(&value.directives),
            extensions: Default::default(),
            ast_node: Some(value.clone()),
        }
    }
}

impl From<&ast::TypeDefinition> for NamedType {
    fn from(definition: &ast::TypeDefinition) -> Self {
        match definition {
            ast::TypeDefinition::Object(node) => NamedType::Object(ObjectType {
                description: node.description.clone(),
                fields: fields_from_ast(&node.fields),
                interfaces: node.implements_interfaces.clone(),
                ast_node: Some(node.clone()),
                ..ObjectType::new(node.name.clone())
            }),
            ast::TypeDefinition::Interface(node) => NamedType::Interface(InterfaceType {
                description: node.description.clone(),
                fields: fields_from_ast(&node.fields),
                interfaces: node.implements_interfaces.clone(),
                ast_node: Some(node.clone()),
                ..InterfaceType::new(node.name.clone())
            }),
            ast::TypeDefinition::InputObject(node) => NamedType::InputObject(InputObjectType {
                description: node.description.clone(),
                fields: input_values_from_ast(&node.fields),
                ast_node: Some(node.clone()),
                ..InputObjectType::new(node.name.clone())
            }),
            ast::TypeDefinition::Union(node) => NamedType::Union(UnionType {
                description: node.description.clone(),
                types: node.types.clone(),
                ast_node: Some(node.clone()),
                ..UnionType::new(node.name.clone())
            }),
            ast::TypeDefinition::Enum(node) => NamedType::Enum(EnumType {
                description: node.description.clone(),
                values: enum_values_from_ast(&node.values),
                ast_node: Some(node.clone()),
                ..EnumType::new(node.name.clone())
            }),
            ast::TypeDefinition::Scalar(node) => NamedType::Scalar(ScalarType {
                description: node.description.clone(),
                specified_by_url: find_directive::<SpecifiedByDirective>(&node.directives)
                    .and_then(|d| d.url),
                ast_node: Some(node.clone()),
                ..ScalarType::new(node.name.clone())
            }),
        }
    }
}

pub(crate) fn extension_kind(extension: &ast::TypeExtension) -> TypeKind {
    match extension {
        ast::TypeExtension::Object(_) => TypeKind::Object,
        ast::TypeExtension::Interface(_) => TypeKind::Interface,
        ast::TypeExtension::InputObject(_) => TypeKind::InputObject,
        ast::TypeExtension::Union(_) => TypeKind::Union,
        ast::TypeExtension::Enum(_) => TypeKind::Enum,
        ast::TypeExtension::Scalar(_) => TypeKind::Scalar,
    }
}

/// Adds `additions` to `target`, rejecting names `target` already has.
fn extend_unique<V>(
    target: &mut IndexMap<String, V>,
    additions: IndexMap<String, V>,
    type_name: &str,
    element: &str,
) -> Result<(), String> {
    for (name, value) in additions {
        if target.contains_key(&name) {
            return Err(format!(
                "{element} \"{type_name}.{name}\" is defined more than once"
            ));
        }
        target.insert(name, value);
    }

    Ok(())
}

impl NamedType {
    /// An empty type of the extension's kind, for extensions of a type the document
    /// does not define.
    pub(crate) fn empty_for_extension(extension: &ast::TypeExtension) -> Self {
        let name = extension.name().to_string();

        match extension {
            ast::TypeExtension::Object(_) => NamedType::Object(ObjectType::new(name)),
            ast::TypeExtension::Interface(_) => NamedType::Interface(InterfaceType::new(name)),
            ast::TypeExtension::InputObject(_) => {
                NamedType::InputObject(InputObjectType::new(name))
            }
            ast::TypeExtension::Union(_) => NamedType::Union(UnionType::new(name)),
            ast::TypeExtension::Enum(_) => NamedType::Enum(EnumType::new(name)),
            ast::TypeExtension::Scalar(_) => NamedType::Scalar(ScalarType::new(name)),
        }
    }

    /// Folds an `extend ...` definition into this type. Fails with a message when the
    /// extension is of a different kind, or redefines a field or enum value.
    pub(crate) fn apply_extension(
        &mut self,
        extension: &ast::TypeExtension,
    ) -> Result<(), String> {
        let target_kind = self.kind();

        match (self, extension) {
            (NamedType::Object(object), ast::TypeExtension::Object(node)) => {
                extend_unique(
                    &mut object.fields,
                    fields_from_ast(&node.fields),
                    &node.name,
                    "field",
                )?;
                append_names(&mut object.interfaces, &node.implements_interfaces);
                object.extension_ast_nodes.push(node.clone());
            }
            (NamedType::Interface(interface), ast::TypeExtension::Interface(node)) => {
                extend_unique(
                    &mut interface.fields,
                    fields_from_ast(&node.fields),
                    &node.name,
                    "field",
                )?;
                append_names(&mut interface.interfaces, &node.implements_interfaces);
                interface.extension_ast_nodes.push(node.clone());
            }
            (NamedType::InputObject(input_object), ast::TypeExtension::InputObject(node)) => {
                extend_unique(
                    &mut input_object.fields,
                    input_values_from_ast(&node.fields),
                    &node.name,
                    "input field",
                )?;
                input_object.extension_ast_nodes.push(node.clone());
            }
            (NamedType::Union(union), ast::TypeExtension::Union(node)) => {
                append_names(&mut union.types, &node.types);
                union.extension_ast_nodes.push(node.clone());
            }
            (NamedType::Enum(enum_), ast::TypeExtension::Enum(node)) => {
                extend_unique(
                    &mut enum_.values,
                    enum_values_from_ast(&node.values),
                    &node.name,
                    "enum value",
                )?;
                enum_.extension_ast_nodes.push(node.clone());
            }
            (NamedType::Scalar(scalar), ast::TypeExtension::Scalar(node)) => {
                if let Some(url) =
                    find_directive::<SpecifiedByDirective>(&node.directives).and_then(|d| d.url)
                {
                    scalar.specified_by_url = Some(url);
                }
                scalar.extension_ast_nodes.push(node.clone());
            }
            _ => {
                return Err(format!(
                    "cannot extend {} \"{}\" with an extension of a different kind ({})",
                    target_kind,
                    extension.name(),
                    extension_kind(extension)
                ))
            }
        }

        Ok(())
    }
}
