use indexmap::IndexMap;

use crate::ast::ext::TypeExt;
use crate::ast::static_graphql::{EnumValue, Field, InputValue, Type, Value};
use crate::schema::Extensions;

/// An output field of an object or interface type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub description: Option<String>,
    pub field_type: Type,
    pub args: IndexMap<String, InputValueConfig>,
    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
    pub ast_node: Option<Field>,
}

impl FieldConfig {
    pub fn new(field_type: Type) -> Self {
        Self {
            description: None,
            field_type,
            args: IndexMap::new(),
            deprecation_reason: None,
            extensions: Extensions::new(),
            ast_node: None,
        }
    }

    /// Drops the outer non-null wrapper from the field type, in the config and its AST node.
    pub fn make_nullable(&mut self) {
        self.field_type = self.field_type.nullable();

        if let Some(ast_node) = self.ast_node.as_mut() {
            ast_node.field_type = ast_node.field_type.nullable();
        }
    }
}

/// An argument of an output field, or a field of an input object type.
#[derive(Debug, Clone, PartialEq)]
pub struct InputValueConfig {
    pub description: Option<String>,
    pub value_type: Type,
    pub default_value: Option<Value>,
    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
    pub ast_node: Option<InputValue>,
}

impl InputValueConfig {
    pub fn new(value_type: Type) -> Self {
        Self {
            description: None,
            value_type,
            default_value: None,
            deprecation_reason: None,
            extensions: Extensions::new(),
            ast_node: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnumValueConfig {
    pub description: Option<String>,
    /// Internal value the enum value maps to. `None` means the value's own name.
    pub value: Option<serde_json::Value>,
    pub deprecation_reason: Option<String>,
    pub extensions: Extensions,
    pub ast_node: Option<EnumValue>,
}
