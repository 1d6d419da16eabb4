use std::fmt::{Debug, Formatter};

use indexmap::IndexMap;

use crate::ast::static_graphql as ast;
use crate::schema::scalar::same_function;
use crate::schema::{
    EnumValueConfig, Extensions, FieldConfig, InputValueConfig, ParseLiteralFn, ParseValueFn,
    SerializeFn,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldConfig>,
    pub interfaces: Vec<String>,
    pub extensions: Extensions,
    pub ast_node: Option<ast::ObjectType>,
    pub extension_ast_nodes: Vec<ast::ObjectTypeExtension>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, FieldConfig>,
    pub interfaces: Vec<String>,
    pub extensions: Extensions,
    pub ast_node: Option<ast::InterfaceType>,
    pub extension_ast_nodes: Vec<ast::InterfaceTypeExtension>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: IndexMap<String, InputValueConfig>,
    pub extensions: Extensions,
    pub ast_node: Option<ast::InputObjectType>,
    pub extension_ast_nodes: Vec<ast::InputObjectTypeExtension>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnionType {
    pub name: String,
    pub description: Option<String>,
    /// Names of the member object types.
    pub types: Vec<String>,
    pub extensions: Extensions,
    pub ast_node: Option<ast::UnionType>,
    pub extension_ast_nodes: Vec<ast::UnionTypeExtension>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    pub values: IndexMap<String, EnumValueConfig>,
    pub extensions: Extensions,
    pub ast_node: Option<ast::EnumType>,
    pub extension_ast_nodes: Vec<ast::EnumTypeExtension>,
}

#[derive(Clone)]
pub struct ScalarType {
    pub name: String,
    pub description: Option<String>,
    pub specified_by_url: Option<String>,
    pub serialize: Option<SerializeFn>,
    pub parse_value: Option<ParseValueFn>,
    pub parse_literal: Option<ParseLiteralFn>,
    pub extensions: Extensions,
    pub ast_node: Option<ast::ScalarType>,
    pub extension_ast_nodes: Vec<ast::ScalarTypeExtension>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            interfaces: vec![],
            extensions: Extensions::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }
}

impl InterfaceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            interfaces: vec![],
            extensions: Extensions::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }
}

impl InputObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
            extensions: Extensions::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }
}

impl UnionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            types: vec![],
            extensions: Extensions::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }
}

impl EnumType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            values: IndexMap::new(),
            extensions: Extensions::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }
}

impl ScalarType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            specified_by_url: None,
            serialize: None,
            parse_value: None,
            parse_literal: None,
            extensions: Extensions::new(),
            ast_node: None,
            extension_ast_nodes: vec![],
        }
    }
}

impl Debug for ScalarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalarType")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("specified_by_url", &self.specified_by_url)
            .field("serialize", &self.serialize.is_some())
            .field("parse_value", &self.parse_value.is_some())
            .field("parse_literal", &self.parse_literal.is_some())
            .field("extensions", &self.extensions)
            .field("ast_node", &self.ast_node)
            .field("extension_ast_nodes", &self.extension_ast_nodes)
            .finish()
    }
}

/// Coercion functions compare by identity.
impl PartialEq for ScalarType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.specified_by_url == other.specified_by_url
            && same_function(&self.serialize, &other.serialize)
            && same_function(&self.parse_value, &other.parse_value)
            && same_function(&self.parse_literal, &other.parse_literal)
            && self.extensions == other.extensions
            && self.ast_node == other.ast_node
            && self.extension_ast_nodes == other.extension_ast_nodes
    }
}
