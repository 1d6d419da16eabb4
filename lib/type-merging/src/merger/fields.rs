use indexmap::IndexMap;
use tracing::instrument;

use crate::candidates::{
    EnumValueConfigCandidate, FieldConfigCandidate, InputFieldConfigCandidate, TypeCandidate,
};
use crate::error::TypeMergingError;
use crate::merger::TypeMerger;
use crate::schema::{EnumValueConfig, FieldConfig, InputValueConfig};
use crate::validation::{
    input_field_inclusion, validate_field_consistency, validate_input_field_consistency,
    validate_input_object_consistency,
};

/// `candidates` and `fields` are parallel: `fields[i]` is the field map of `candidates[i]`.
#[instrument(level = "trace", skip_all, fields(candidates = candidates.len()))]
pub(crate) fn field_config_map_from_candidates(
    merger: &TypeMerger,
    candidates: &[TypeCandidate],
    fields: &[&IndexMap<String, FieldConfig>],
) -> Result<IndexMap<String, FieldConfig>, TypeMergingError> {
    let mut by_field_name: IndexMap<&str, Vec<FieldConfigCandidate<'_>>> = IndexMap::new();

    for (type_candidate, field_map) in candidates.iter().zip(fields.iter()) {
        for (field_name, field_config) in field_map.iter() {
            by_field_name
                .entry(field_name.as_str())
                .or_default()
                .push(FieldConfigCandidate {
                    field_name: field_name.as_str(),
                    field_config,
                    type_candidate,
                });
        }
    }

    by_field_name
        .into_iter()
        .map(|(field_name, field_candidates)| {
            merge_field_configs(merger, &field_candidates)
                .map(|merged| (field_name.to_string(), merged))
        })
        .collect()
}

fn merge_field_configs(
    merger: &TypeMerger,
    candidates: &[FieldConfigCandidate<'_>],
) -> Result<FieldConfig, TypeMergingError> {
    let merged = merger
        .strategy()
        .field_config(candidates, merger.options())?;
    validate_field_consistency(&merged, candidates, merger.options())?;

    Ok(merged)
}

#[instrument(level = "trace", skip_all, fields(candidates = candidates.len()))]
pub(crate) fn input_field_config_map_from_candidates(
    merger: &TypeMerger,
    candidates: &[TypeCandidate],
    fields: &[&IndexMap<String, InputValueConfig>],
) -> Result<IndexMap<String, InputValueConfig>, TypeMergingError> {
    let mut by_field_name: IndexMap<&str, Vec<InputFieldConfigCandidate<'_>>> = IndexMap::new();

    for (type_candidate, field_map) in candidates.iter().zip(fields.iter()) {
        for (field_name, input_field_config) in field_map.iter() {
            by_field_name
                .entry(field_name.as_str())
                .or_default()
                .push(InputFieldConfigCandidate {
                    field_name: field_name.as_str(),
                    input_field_config,
                    type_candidate,
                });
        }
    }

    let field_inclusion = input_field_inclusion(fields.iter().copied());
    validate_input_object_consistency(&field_inclusion, candidates, merger.options())?;

    by_field_name
        .into_iter()
        .map(|(field_name, field_candidates)| {
            merge_input_field_configs(merger, &field_candidates)
                .map(|merged| (field_name.to_string(), merged))
        })
        .collect()
}

fn merge_input_field_configs(
    merger: &TypeMerger,
    candidates: &[InputFieldConfigCandidate<'_>],
) -> Result<InputValueConfig, TypeMergingError> {
    let merged = merger
        .strategy()
        .input_field_config(candidates, merger.options())?;
    validate_input_field_consistency(&merged, candidates, merger.options())?;

    Ok(merged)
}

pub(crate) fn enum_value_config_map_from_candidates(
    merger: &TypeMerger,
    candidates: &[TypeCandidate],
    values: &[&IndexMap<String, EnumValueConfig>],
) -> Result<IndexMap<String, EnumValueConfig>, TypeMergingError> {
    let mut by_value: IndexMap<&str, Vec<EnumValueConfigCandidate<'_>>> = IndexMap::new();

    for (type_candidate, value_map) in candidates.iter().zip(values.iter()) {
        for (enum_value, enum_value_config) in value_map.iter() {
            by_value
                .entry(enum_value.as_str())
                .or_default()
                .push(EnumValueConfigCandidate {
                    enum_value: enum_value.as_str(),
                    enum_value_config,
                    type_candidate,
                });
        }
    }

    by_value
        .into_iter()
        .map(|(enum_value, value_candidates)| {
            merger
                .strategy()
                .enum_value_config(&value_candidates, merger.options())
                .map(|merged| (enum_value.to_string(), merged))
        })
        .collect()
}
