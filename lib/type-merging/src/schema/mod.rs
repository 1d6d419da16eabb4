mod fields;
mod from_ast;
mod scalar;
mod subschema;
mod to_ast;
mod types;

use std::fmt::{Display, Formatter};

use indexmap::IndexMap;

pub use fields::{EnumValueConfig, FieldConfig, InputValueConfig};
pub use scalar::{CoercionError, ParseLiteralFn, ParseValueFn, SerializeFn};
pub use subschema::Subschema;
pub use to_ast::print_types;
pub use types::{EnumType, InputObjectType, InterfaceType, ObjectType, ScalarType, UnionType};

/// Free-form metadata attached to a type or field, merged shallowly.
pub type Extensions = IndexMap<String, serde_json::Value>;

pub(crate) const BUILTIN_SCALARS: [&str; 5] = ["String", "Int", "Float", "Boolean", "ID"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Object,
    InputObject,
    Interface,
    Union,
    Enum,
    Scalar,
}

impl Display for TypeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeKind::Object => write!(f, "object type"),
            TypeKind::InputObject => write!(f, "input object type"),
            TypeKind::Interface => write!(f, "interface type"),
            TypeKind::Union => write!(f, "union type"),
            TypeKind::Enum => write!(f, "enum type"),
            TypeKind::Scalar => write!(f, "scalar type"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NamedType {
    Object(ObjectType),
    InputObject(InputObjectType),
    Interface(InterfaceType),
    Union(UnionType),
    Enum(EnumType),
    Scalar(ScalarType),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            NamedType::Object(object) => &object.name,
            NamedType::InputObject(input_object) => &input_object.name,
            NamedType::Interface(interface) => &interface.name,
            NamedType::Union(union) => &union.name,
            NamedType::Enum(enum_) => &enum_.name,
            NamedType::Scalar(scalar) => &scalar.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            NamedType::Object(_) => TypeKind::Object,
            NamedType::InputObject(_) => TypeKind::InputObject,
            NamedType::Interface(_) => TypeKind::Interface,
            NamedType::Union(_) => TypeKind::Union,
            NamedType::Enum(_) => TypeKind::Enum,
            NamedType::Scalar(_) => TypeKind::Scalar,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            NamedType::Object(object) => object.description.as_deref(),
            NamedType::InputObject(input_object) => input_object.description.as_deref(),
            NamedType::Interface(interface) => interface.description.as_deref(),
            NamedType::Union(union) => union.description.as_deref(),
            NamedType::Enum(enum_) => enum_.description.as_deref(),
            NamedType::Scalar(scalar) => scalar.description.as_deref(),
        }
    }

    pub fn extensions(&self) -> &Extensions {
        match self {
            NamedType::Object(object) => &object.extensions,
            NamedType::InputObject(input_object) => &input_object.extensions,
            NamedType::Interface(interface) => &interface.extensions,
            NamedType::Union(union) => &union.extensions,
            NamedType::Enum(enum_) => &enum_.extensions,
            NamedType::Scalar(scalar) => &scalar.extensions,
        }
    }

    /// Output fields, for object and interface types.
    pub fn fields(&self) -> Option<&IndexMap<String, FieldConfig>> {
        match self {
            NamedType::Object(object) => Some(&object.fields),
            NamedType::Interface(interface) => Some(&interface.fields),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        match self {
            NamedType::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        match self {
            NamedType::InputObject(input_object) => Some(input_object),
            _ => None,
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        match self {
            NamedType::Interface(interface) => Some(interface),
            _ => None,
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        match self {
            NamedType::Union(union) => Some(union),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match self {
            NamedType::Enum(enum_) => Some(enum_),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarType> {
        match self {
            NamedType::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}
