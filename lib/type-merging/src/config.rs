use std::collections::HashMap;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ast::ext::{SchemaDocumentExt, TypeDefinitionExt};
use crate::ast::static_graphql::{Directive, Document, TypeDefinition, TypeExtension};
use crate::directives::{CanonicalDirective, SchemaDirective};

/// Merge configuration of a single subgraph, keyed by type name.
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
pub struct SubschemaConfig {
    #[serde(default)]
    pub merge: IndexMap<String, MergedTypeConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
pub struct MergedTypeConfig {
    /// Marks this subgraph's definition of the type as the authoritative one.
    /// At most one subgraph may set it for a given type.
    #[serde(default)]
    pub canonical: bool,
    /// Per-field overrides. A canonical field takes precedence over a canonical type.
    #[serde(default)]
    pub fields: IndexMap<String, MergedFieldConfig>,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
pub struct MergedFieldConfig {
    #[serde(default)]
    pub canonical: bool,
}

impl SubschemaConfig {
    pub fn is_empty(&self) -> bool {
        self.merge.is_empty()
    }

    pub fn type_config(&self, type_name: &str) -> Option<&MergedTypeConfig> {
        self.merge.get(type_name)
    }

    pub fn is_type_canonical(&self, type_name: &str) -> bool {
        self.type_config(type_name).is_some_and(|t| t.canonical)
    }

    pub fn is_field_canonical(&self, type_name: &str, field_name: &str) -> bool {
        self.type_config(type_name)
            .and_then(|t| t.fields.get(field_name))
            .is_some_and(|f| f.canonical)
    }

    /// Builds the merge configuration from `@canonical` directives found on types,
    /// fields and input fields of a subgraph document (including type extensions).
    pub fn from_canonical_directives(document: &Document) -> Self {
        let mut config = SubschemaConfig::default();

        for type_def in document.type_definitions() {
            let (directives, field_directives) = match type_def {
                TypeDefinition::Object(object) => (
                    &object.directives,
                    Self::field_directives(object.fields.iter().map(|f| (&f.name, &f.directives))),
                ),
                TypeDefinition::Interface(interface) => (
                    &interface.directives,
                    Self::field_directives(
                        interface.fields.iter().map(|f| (&f.name, &f.directives)),
                    ),
                ),
                TypeDefinition::InputObject(input_object) => (
                    &input_object.directives,
                    Self::field_directives(
                        input_object
                            .fields
                            .iter()
                            .map(|f| (&f.name, &f.directives)),
                    ),
                ),
                TypeDefinition::Union(union) => (&union.directives, vec![]),
                TypeDefinition::Enum(enum_) => (&enum_.directives, vec![]),
                TypeDefinition::Scalar(scalar) => (&scalar.directives, vec![]),
            };

            config.apply_canonical(type_def.name(), directives, field_directives);
        }

        for type_ext in document.type_extensions() {
            let (directives, field_directives) = match type_ext {
                TypeExtension::Object(object) => (
                    &object.directives,
                    Self::field_directives(object.fields.iter().map(|f| (&f.name, &f.directives))),
                ),
                TypeExtension::Interface(interface) => (
                    &interface.directives,
                    Self::field_directives(
                        interface.fields.iter().map(|f| (&f.name, &f.directives)),
                    ),
                ),
                TypeExtension::InputObject(input_object) => (
                    &input_object.directives,
                    Self::field_directives(
                        input_object
                            .fields
                            .iter()
                            .map(|f| (&f.name, &f.directives)),
                    ),
                ),
                TypeExtension::Union(union) => (&union.directives, vec![]),
                TypeExtension::Enum(enum_) => (&enum_.directives, vec![]),
                TypeExtension::Scalar(scalar) => (&scalar.directives, vec![]),
            };

            config.apply_canonical(type_ext.name(), directives, field_directives);
        }

        config
    }

    fn field_directives<'a>(
        fields: impl Iterator<Item = (&'a String, &'a Vec<Directive>)>,
    ) -> Vec<(&'a String, &'a Vec<Directive>)> {
        fields.collect()
    }

    fn apply_canonical(
        &mut self,
        type_name: &str,
        directives: &[Directive],
        field_directives: Vec<(&String, &Vec<Directive>)>,
    ) {
        if directives.iter().any(CanonicalDirective::is) {
            self.merge.entry(type_name.to_string()).or_default().canonical = true;
        }

        for (field_name, directives) in field_directives {
            if directives.iter().any(CanonicalDirective::is) {
                self.merge
                    .entry(type_name.to_string())
                    .or_default()
                    .fields
                    .entry(field_name.clone())
                    .or_default()
                    .canonical = true;
            }
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValidationLevel {
    /// Consistency findings abort the merge.
    Error,
    /// Consistency findings are logged and the merge continues.
    #[default]
    Warn,
    /// Consistency findings are ignored.
    Off,
}

#[derive(Debug, Default, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
pub struct ValidationSettings {
    /// How consistency findings are reported. Defaults to `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_level: Option<ValidationLevel>,
    /// When enabled, any nullability difference between the merged element and one of
    /// its candidates is reported, in either direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict_null_comparison: Option<bool>,
    /// Scalars allowed to stand in for each other, keyed by the merged scalar name.
    /// `{ "ID": ["String"] }` allows a merged `ID` field to be `String` in other subgraphs.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub proxiable_scalars: HashMap<String, Vec<String>>,
}

impl ValidationSettings {
    pub fn validation_level(&self) -> ValidationLevel {
        self.validation_level.unwrap_or_default()
    }

    pub fn strict_null_comparison(&self) -> bool {
        self.strict_null_comparison.unwrap_or(false)
    }

    pub fn is_proxiable_scalar(&self, merged_scalar: &str, candidate_scalar: &str) -> bool {
        self.proxiable_scalars
            .get(merged_scalar)
            .is_some_and(|allowed| allowed.iter().any(|name| name == candidate_scalar))
    }

    /// Settings in `scoped` take precedence over `self` wherever they are set.
    fn overlay(&self, scoped: &ValidationSettings) -> ValidationSettings {
        ValidationSettings {
            validation_level: scoped.validation_level.or(self.validation_level),
            strict_null_comparison: scoped
                .strict_null_comparison
                .or(self.strict_null_comparison),
            proxiable_scalars: if scoped.proxiable_scalars.is_empty() {
                self.proxiable_scalars.clone()
            } else {
                scoped.proxiable_scalars.clone()
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Clone, PartialEq)]
pub struct TypeMergingOptions {
    /// When candidates of a field disagree on nullability, the merged field is made nullable.
    #[serde(default = "default_use_non_nullable_field_on_conflict")]
    pub use_non_nullable_field_on_conflict: bool,
    /// Validation settings applied to every merged element.
    #[serde(default)]
    pub validation_settings: ValidationSettings,
    /// Validation settings for a specific coordinate (`Type.field` or `Type.field.argument`),
    /// overriding `validation_settings`.
    #[serde(default)]
    pub validation_scopes: HashMap<String, ValidationSettings>,
}

impl Default for TypeMergingOptions {
    fn default() -> Self {
        Self {
            use_non_nullable_field_on_conflict: default_use_non_nullable_field_on_conflict(),
            validation_settings: ValidationSettings::default(),
            validation_scopes: HashMap::new(),
        }
    }
}

fn default_use_non_nullable_field_on_conflict() -> bool {
    false
}

impl TypeMergingOptions {
    pub fn validation_settings_for(&self, namespace: &str) -> ValidationSettings {
        match self.validation_scopes.get(namespace) {
            Some(scoped) => self.validation_settings.overlay(scoped),
            None => self.validation_settings.clone(),
        }
    }
}
