use std::sync::Arc;

use indexmap::IndexMap;
use tracing::instrument;

use crate::config::{MergedTypeConfig, SubschemaConfig};
use crate::error::TypeMergingError;
use crate::schema::{EnumValueConfig, FieldConfig, InputValueConfig, NamedType, Subschema};

/// A subgraph together with its (optional) merge configuration.
#[derive(Debug, Clone)]
pub struct SubgraphSource {
    pub subschema: Arc<Subschema>,
    pub config: Option<Arc<SubschemaConfig>>,
}

impl SubgraphSource {
    pub fn new(subschema: Subschema) -> Self {
        Self {
            subschema: Arc::new(subschema),
            config: None,
        }
    }

    pub fn with_config(mut self, config: SubschemaConfig) -> Self {
        self.config = Some(Arc::new(config));
        self
    }

    /// Parses a subgraph SDL. `@canonical` directives in the document become its merge
    /// configuration.
    pub fn from_sdl(name: &str, sdl: &str) -> Result<Self, TypeMergingError> {
        let document = Subschema::parse_document(name, sdl)?;
        let subschema = Subschema::from_document(name, &document)?;
        let config = SubschemaConfig::from_canonical_directives(&document);

        Ok(Self {
            subschema: Arc::new(subschema),
            config: (!config.is_empty()).then(|| Arc::new(config)),
        })
    }
}

/// One subgraph's definition of a type that has to be merged.
#[derive(Debug, Clone)]
pub struct TypeCandidate {
    pub type_def: Arc<NamedType>,
    pub subschema: Arc<Subschema>,
    pub transformed_subschema: Option<Arc<SubschemaConfig>>,
}

impl TypeCandidate {
    pub fn new(
        type_def: Arc<NamedType>,
        subschema: Arc<Subschema>,
        transformed_subschema: Option<Arc<SubschemaConfig>>,
    ) -> Self {
        Self {
            type_def,
            subschema,
            transformed_subschema,
        }
    }

    pub fn type_name(&self) -> &str {
        self.type_def.name()
    }

    pub fn subgraph_name(&self) -> &str {
        &self.subschema.name
    }

    /// Only candidates of subgraphs carrying a merge configuration take part in
    /// canonical resolution.
    pub fn is_eligible(&self) -> bool {
        self.transformed_subschema.is_some()
    }

    pub fn merge_config(&self) -> Option<&MergedTypeConfig> {
        self.transformed_subschema
            .as_ref()
            .and_then(|config| config.type_config(self.type_name()))
    }

    pub fn is_canonical(&self) -> bool {
        self.merge_config().is_some_and(|config| config.canonical)
    }

    pub fn is_field_canonical(&self, field_name: &str) -> bool {
        self.merge_config()
            .and_then(|config| config.fields.get(field_name))
            .is_some_and(|field| field.canonical)
    }
}

/// Shared view over per-field projections of a [`TypeCandidate`].
pub trait FieldCandidate {
    fn field_name(&self) -> &str;
    fn type_candidate(&self) -> &TypeCandidate;

    fn coordinate(&self) -> String {
        format!("{}.{}", self.type_candidate().type_name(), self.field_name())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldConfigCandidate<'a> {
    pub field_name: &'a str,
    pub field_config: &'a FieldConfig,
    pub type_candidate: &'a TypeCandidate,
}

#[derive(Debug, Clone, Copy)]
pub struct InputFieldConfigCandidate<'a> {
    pub field_name: &'a str,
    pub input_field_config: &'a InputValueConfig,
    pub type_candidate: &'a TypeCandidate,
}

#[derive(Debug, Clone, Copy)]
pub struct EnumValueConfigCandidate<'a> {
    pub enum_value: &'a str,
    pub enum_value_config: &'a EnumValueConfig,
    pub type_candidate: &'a TypeCandidate,
}

impl FieldCandidate for FieldConfigCandidate<'_> {
    fn field_name(&self) -> &str {
        self.field_name
    }

    fn type_candidate(&self) -> &TypeCandidate {
        self.type_candidate
    }
}

impl FieldCandidate for InputFieldConfigCandidate<'_> {
    fn field_name(&self) -> &str {
        self.field_name
    }

    fn type_candidate(&self) -> &TypeCandidate {
        self.type_candidate
    }
}

/// Groups every named type of every subgraph by type name. Groups appear in the order
/// their name is first seen; candidates within a group follow subgraph order.
/// Introspection types are skipped.
#[instrument(level = "debug", skip(sources), fields(subgraphs = sources.len()))]
pub fn collect_type_candidates(sources: &[SubgraphSource]) -> IndexMap<String, Vec<TypeCandidate>> {
    let mut candidates: IndexMap<String, Vec<TypeCandidate>> = IndexMap::new();

    for source in sources {
        for (type_name, type_def) in source.subschema.types.iter() {
            if type_name.starts_with("__") {
                continue;
            }

            candidates
                .entry(type_name.clone())
                .or_default()
                .push(TypeCandidate::new(
                    type_def.clone(),
                    source.subschema.clone(),
                    source.config.clone(),
                ));
        }
    }

    candidates
}
