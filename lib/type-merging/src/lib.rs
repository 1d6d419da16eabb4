pub mod ast;
pub mod candidates;
pub mod config;
pub mod directives;
pub mod error;
pub mod merger;
pub mod schema;
pub mod strategy;
pub mod validation;

#[cfg(test)]
mod tests;

pub use candidates::{collect_type_candidates, SubgraphSource, TypeCandidate};
pub use config::{
    MergedFieldConfig, MergedTypeConfig, SubschemaConfig, TypeMergingOptions, ValidationLevel,
    ValidationSettings,
};
pub use error::TypeMergingError;
pub use merger::TypeMerger;
pub use schema::{print_types, NamedType, Subschema, TypeKind};
pub use strategy::{DefaultMergeStrategy, MergeStrategy};
