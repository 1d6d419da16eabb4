//! Pluggable stages of the merge. Every method of [`MergeStrategy`] has a default
//! implementation, so a custom strategy overrides only the stages it cares about.

use tracing::debug;

use crate::ast::ext::TypeExt;
use crate::candidates::{
    EnumValueConfigCandidate, FieldCandidate, FieldConfigCandidate, InputFieldConfigCandidate,
    TypeCandidate,
};
use crate::config::TypeMergingOptions;
use crate::error::TypeMergingError;
use crate::schema::{EnumValueConfig, FieldConfig, InputValueConfig};

pub trait MergeStrategy: Send + Sync {
    /// Picks the canonical candidate of a type. The chosen candidate is applied last.
    fn type_candidate<'c>(
        &self,
        candidates: &'c [TypeCandidate],
    ) -> Result<&'c TypeCandidate, TypeMergingError> {
        default_type_candidate_merger(candidates)
    }

    /// Receives the candidates already ordered, canonical last.
    fn type_description(&self, candidates: &[TypeCandidate]) -> Option<String> {
        default_type_description_merger(candidates)
    }

    fn field_config(
        &self,
        candidates: &[FieldConfigCandidate<'_>],
        options: &TypeMergingOptions,
    ) -> Result<FieldConfig, TypeMergingError> {
        default_field_config_merger(candidates, options)
    }

    fn input_field_config(
        &self,
        candidates: &[InputFieldConfigCandidate<'_>],
        _options: &TypeMergingOptions,
    ) -> Result<InputValueConfig, TypeMergingError> {
        default_input_field_config_merger(candidates)
    }

    fn enum_value_config(
        &self,
        candidates: &[EnumValueConfigCandidate<'_>],
        _options: &TypeMergingOptions,
    ) -> Result<EnumValueConfig, TypeMergingError> {
        default_enum_value_config_merger(candidates)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultMergeStrategy;

impl MergeStrategy for DefaultMergeStrategy {}

pub fn default_type_candidate_merger(
    candidates: &[TypeCandidate],
) -> Result<&TypeCandidate, TypeMergingError> {
    let mut canonical = candidates.iter().filter(|c| c.is_canonical());

    match (canonical.next(), canonical.next()) {
        (Some(first), Some(_)) => Err(TypeMergingError::MultipleCanonicalDefinitions(
            first.type_name().to_string(),
        )),
        (Some(first), None) => {
            debug!(
                type_name = first.type_name(),
                subgraph = first.subgraph_name(),
                "using canonical type definition"
            );
            Ok(first)
        }
        (None, _) => candidates.last().ok_or_else(|| {
            TypeMergingError::MissingRequiredData("no type candidates to choose from".to_string())
        }),
    }
}

pub fn default_type_description_merger(candidates: &[TypeCandidate]) -> Option<String> {
    candidates
        .last()
        .and_then(|candidate| candidate.type_def.description())
        .map(ToString::to_string)
}

/// Field-canonical beats type-canonical, which beats the last candidate.
pub fn select_field_candidate<'c, C: FieldCandidate>(
    candidates: &'c [C],
) -> Result<&'c C, TypeMergingError> {
    let mut canonical_by_field = vec![];
    let mut canonical_by_type = vec![];

    for candidate in candidates
        .iter()
        .filter(|c| c.type_candidate().is_eligible())
    {
        let type_candidate = candidate.type_candidate();

        if type_candidate.is_field_canonical(candidate.field_name()) {
            canonical_by_field.push(candidate);
        } else if type_candidate.is_canonical() {
            canonical_by_type.push(candidate);
        }
    }

    if canonical_by_field.len() > 1 {
        return Err(TypeMergingError::MultipleCanonicalDefinitions(
            canonical_by_field[0].coordinate(),
        ));
    }

    if let Some(candidate) = canonical_by_field.first().or(canonical_by_type.first()) {
        return Ok(*candidate);
    }

    candidates.last().ok_or_else(|| {
        TypeMergingError::MissingRequiredData("no field candidates to choose from".to_string())
    })
}

pub fn default_field_config_merger(
    candidates: &[FieldConfigCandidate<'_>],
    options: &TypeMergingOptions,
) -> Result<FieldConfig, TypeMergingError> {
    let selected = select_field_candidate(candidates)?;
    let mut field_config = selected.field_config.clone();

    if options.use_non_nullable_field_on_conflict {
        let has_nullable = candidates
            .iter()
            .any(|c| !c.field_config.field_type.is_non_null());
        let has_non_null = candidates
            .iter()
            .any(|c| c.field_config.field_type.is_non_null());

        if has_nullable && has_non_null {
            debug!(
                coordinate = %selected.coordinate(),
                "nullability differs across subgraphs, merged field is nullable"
            );
            field_config.make_nullable();
        }
    }

    Ok(field_config)
}

pub fn default_input_field_config_merger(
    candidates: &[InputFieldConfigCandidate<'_>],
) -> Result<InputValueConfig, TypeMergingError> {
    select_field_candidate(candidates).map(|selected| selected.input_field_config.clone())
}

/// Enum values follow the canonical flag of their type only.
pub fn default_enum_value_config_merger(
    candidates: &[EnumValueConfigCandidate<'_>],
) -> Result<EnumValueConfig, TypeMergingError> {
    candidates
        .iter()
        .find(|c| c.type_candidate.is_canonical())
        .or(candidates.last())
        .map(|selected| selected.enum_value_config.clone())
        .ok_or_else(|| {
            TypeMergingError::MissingRequiredData(
                "no enum value candidates to choose from".to_string(),
            )
        })
}
