use std::sync::Arc;

use indexmap::IndexMap;
use tracing::instrument;

use crate::ast::ext::{SchemaDocumentExt, TypeDefinitionExt};
use crate::ast::static_graphql::Document;
use crate::error::TypeMergingError;
use crate::schema::{NamedType, TypeKind, BUILTIN_SCALARS};

/// The type system of one subgraph.
#[derive(Debug, Clone)]
pub struct Subschema {
    pub name: String,
    pub types: IndexMap<String, Arc<NamedType>>,
}

impl Subschema {
    pub fn new(name: impl Into<String>, types: impl IntoIterator<Item = NamedType>) -> Self {
        Self {
            name: name.into(),
            types: types
                .into_iter()
                .map(|named_type| (named_type.name().to_string(), Arc::new(named_type)))
                .collect(),
        }
    }

    pub fn parse_document(name: &str, sdl: &str) -> Result<Document, TypeMergingError> {
        graphql_parser::parse_schema::<String>(sdl)
            .map(|document| document.into_static())
            .map_err(|err| TypeMergingError::SchemaParse {
                subgraph: name.to_string(),
                message: err.to_string(),
            })
    }

    pub fn from_sdl(name: &str, sdl: &str) -> Result<Self, TypeMergingError> {
        let document = Self::parse_document(name, sdl)?;
        Self::from_document(name, &document)
    }

    /// Builds the type map of a subgraph document. Type extensions are folded into the
    /// type they extend, in document order. An extension of a type the document does not
    /// define stands in for its definition.
    #[instrument(level = "trace", skip(document), fields(definitions = document.definitions.len()))]
    pub fn from_document(name: &str, document: &Document) -> Result<Self, TypeMergingError> {
        let mut types: IndexMap<String, NamedType> = IndexMap::new();

        for type_def in document.type_definitions() {
            if types
                .insert(type_def.name().to_string(), NamedType::from(type_def))
                .is_some()
            {
                return Err(TypeMergingError::InvalidSubschema {
                    subgraph: name.to_string(),
                    message: format!("type \"{}\" is defined more than once", type_def.name()),
                });
            }
        }

        for type_ext in document.type_extensions() {
            let target = types
                .entry(type_ext.name().to_string())
                .or_insert_with(|| NamedType::empty_for_extension(type_ext));

            target
                .apply_extension(type_ext)
                .map_err(|message| TypeMergingError::InvalidSubschema {
                    subgraph: name.to_string(),
                    message,
                })?;
        }

        Ok(Self {
            name: name.to_string(),
            types: types
                .into_iter()
                .map(|(type_name, named_type)| (type_name, Arc::new(named_type)))
                .collect(),
        })
    }

    pub fn type_by_name(&self, name: &str) -> Option<&NamedType> {
        self.types.get(name).map(Arc::as_ref)
    }

    /// The kind of a named type as seen by this subgraph. Built-in scalars are always known.
    pub fn type_kind(&self, name: &str) -> Option<TypeKind> {
        if BUILTIN_SCALARS.contains(&name) {
            return Some(TypeKind::Scalar);
        }

        self.type_by_name(name).map(NamedType::kind)
    }
}
