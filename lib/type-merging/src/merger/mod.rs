mod enum_type;
mod fields;
mod input_object;
mod object;
mod scalar;
mod union;

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, instrument};

use crate::candidates::TypeCandidate;
use crate::config::TypeMergingOptions;
use crate::error::TypeMergingError;
use crate::schema::{Extensions, NamedType};
use crate::strategy::{DefaultMergeStrategy, MergeStrategy};

/// Merges the candidates of one type name into a single type.
///
/// A merger holds no state between calls; the same instance can merge any number of
/// type names, from any number of threads.
#[derive(Clone)]
pub struct TypeMerger {
    options: TypeMergingOptions,
    strategy: Arc<dyn MergeStrategy>,
}

impl Default for TypeMerger {
    fn default() -> Self {
        Self::new(TypeMergingOptions::default())
    }
}

impl std::fmt::Debug for TypeMerger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeMerger")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl TypeMerger {
    pub fn new(options: TypeMergingOptions) -> Self {
        Self {
            options,
            strategy: Arc::new(DefaultMergeStrategy),
        }
    }

    pub fn with_strategy(mut self, strategy: impl MergeStrategy + 'static) -> Self {
        self.strategy = Arc::new(strategy);
        self
    }

    pub fn options(&self) -> &TypeMergingOptions {
        &self.options
    }

    pub(crate) fn strategy(&self) -> &dyn MergeStrategy {
        self.strategy.as_ref()
    }

    /// Merges every candidate group, in order. Stops at the first failing type.
    #[instrument(level = "debug", skip_all, fields(types = groups.len()))]
    pub fn merge_all(
        &self,
        groups: &IndexMap<String, Vec<TypeCandidate>>,
    ) -> Result<IndexMap<String, NamedType>, TypeMergingError> {
        groups
            .iter()
            .map(|(type_name, candidates)| {
                self.merge_type_candidates(type_name, candidates)
                    .map(|merged| (type_name.clone(), merged))
            })
            .collect()
    }

    #[instrument(level = "trace", skip(self, candidates), fields(candidates = candidates.len()))]
    pub fn merge_type_candidates(
        &self,
        type_name: &str,
        candidates: &[TypeCandidate],
    ) -> Result<NamedType, TypeMergingError> {
        let first = candidates.first().ok_or_else(|| {
            TypeMergingError::MissingRequiredData(format!(
                "no candidates were provided for type \"{type_name}\""
            ))
        })?;

        if let Some(candidate) = candidates.iter().find(|c| c.type_name() != type_name) {
            return Err(TypeMergingError::TypeNameMismatch {
                expected: type_name.to_string(),
                found: candidate.type_name().to_string(),
            });
        }

        let kind = first.type_def.kind();
        if let Some(mismatch) = candidates.iter().find(|c| c.type_def.kind() != kind) {
            return Err(TypeMergingError::CategoryMismatch {
                type_name: type_name.to_string(),
                expected: kind,
                expected_subgraph: first.subgraph_name().to_string(),
                found: mismatch.type_def.kind(),
                found_subgraph: mismatch.subgraph_name().to_string(),
            });
        }

        if candidates.len() == 1 {
            debug!(type_name, "single candidate, nothing to reconcile");
        }

        match first.type_def.as_ref() {
            NamedType::Object(_) => object::merge_object_candidates(self, type_name, candidates)
                .map(NamedType::Object),
            NamedType::InputObject(_) => {
                input_object::merge_input_object_candidates(self, type_name, candidates)
                    .map(NamedType::InputObject)
            }
            NamedType::Interface(_) => {
                object::merge_interface_candidates(self, type_name, candidates)
                    .map(NamedType::Interface)
            }
            NamedType::Union(_) => {
                union::merge_union_candidates(self, type_name, candidates).map(NamedType::Union)
            }
            NamedType::Enum(_) => {
                enum_type::merge_enum_candidates(self, type_name, candidates).map(NamedType::Enum)
            }
            NamedType::Scalar(_) => {
                scalar::merge_scalar_candidates(self, type_name, candidates).map(NamedType::Scalar)
            }
        }
    }

    /// Returns the candidates with the canonical one moved to the end, order otherwise kept.
    pub fn ordered_candidates(
        &self,
        candidates: &[TypeCandidate],
    ) -> Result<Vec<TypeCandidate>, TypeMergingError> {
        let canonical = self.strategy.type_candidate(candidates)?;
        let position = candidates
            .iter()
            .position(|c| std::ptr::eq(c, canonical))
            .ok_or_else(|| {
                TypeMergingError::MissingRequiredData(format!(
                    "the selected canonical candidate of \"{}\" is not one of its candidates",
                    canonical.type_name()
                ))
            })?;

        let mut ordered = candidates.to_vec();
        let canonical = ordered.remove(position);
        ordered.push(canonical);

        Ok(ordered)
    }

    pub(crate) fn merge_description(&self, ordered: &[TypeCandidate]) -> Option<String> {
        self.strategy.type_description(ordered)
    }
}

/// Later extensions overwrite earlier ones on key collision.
pub(crate) fn merge_extensions<'a>(all: impl IntoIterator<Item = &'a Extensions>) -> Extensions {
    let mut merged = Extensions::new();

    for extensions in all {
        merged.extend(
            extensions
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
    }

    merged
}

/// Unwraps the kind-specific definition of every candidate. Kinds were checked to be
/// homogeneous before dispatch, a mismatch here is a programming error.
pub(crate) fn expect_kind<'a, T>(
    candidates: &'a [TypeCandidate],
    extract: impl Fn(&'a NamedType) -> Option<&'a T>,
) -> Result<Vec<&'a T>, TypeMergingError> {
    candidates
        .iter()
        .map(|candidate| {
            extract(candidate.type_def.as_ref()).ok_or_else(|| {
                TypeMergingError::MissingRequiredData(format!(
                    "candidate of \"{}\" from subgraph \"{}\" has an unexpected kind",
                    candidate.type_name(),
                    candidate.subgraph_name()
                ))
            })
        })
        .collect()
}
