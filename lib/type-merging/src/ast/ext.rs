use graphql_parser::schema::Type;

use crate::ast::static_graphql::{Definition, Document, TypeDefinition, TypeExtension};

pub trait TypeExt {
    /// The name of the named type at the bottom of all list/non-null wrappers.
    fn inner_type(&self) -> &str;
    fn is_non_null(&self) -> bool;
    /// `true` when a list wrapper appears anywhere in the type reference.
    fn has_list_type(&self) -> bool;
    /// Strips the outermost non-null wrapper, if any.
    fn nullable(&self) -> Self;
}

impl TypeExt for Type<'static, String> {
    fn inner_type(&self) -> &str {
        match self {
            Type::NamedType(name) => name.as_str(),
            Type::ListType(child) => child.inner_type(),
            Type::NonNullType(child) => child.inner_type(),
        }
    }

    fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNullType(_))
    }

    fn has_list_type(&self) -> bool {
        match self {
            Type::NamedType(_) => false,
            Type::ListType(_) => true,
            Type::NonNullType(child) => child.has_list_type(),
        }
    }

    fn nullable(&self) -> Self {
        match self {
            Type::NonNullType(child) => child.as_ref().clone(),
            other => other.clone(),
        }
    }
}

pub trait TypeDefinitionExt {
    fn name(&self) -> &str;
}

impl TypeDefinitionExt for TypeDefinition {
    fn name(&self) -> &str {
        match self {
            TypeDefinition::Scalar(scalar) => &scalar.name,
            TypeDefinition::Object(object) => &object.name,
            TypeDefinition::Interface(interface) => &interface.name,
            TypeDefinition::Union(union) => &union.name,
            TypeDefinition::Enum(enum_) => &enum_.name,
            TypeDefinition::InputObject(input_object) => &input_object.name,
        }
    }
}

impl TypeDefinitionExt for TypeExtension {
    fn name(&self) -> &str {
        match self {
            TypeExtension::Scalar(scalar) => &scalar.name,
            TypeExtension::Object(object) => &object.name,
            TypeExtension::Interface(interface) => &interface.name,
            TypeExtension::Union(union) => &union.name,
            TypeExtension::Enum(enum_) => &enum_.name,
            TypeExtension::InputObject(input_object) => &input_object.name,
        }
    }
}

pub trait SchemaDocumentExt {
    fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition>;
    fn type_extensions(&self) -> impl Iterator<Item = &TypeExtension>;
}

impl SchemaDocumentExt for Document {
    fn type_definitions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::TypeDefinition(type_def) => Some(type_def),
            _ => None,
        })
    }

    fn type_extensions(&self) -> impl Iterator<Item = &TypeExtension> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::TypeExtension(type_ext) => Some(type_ext),
            _ => None,
        })
    }
}
