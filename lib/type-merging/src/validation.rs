//! Consistency checks run on a merged field, input field or input object against the
//! candidates it was merged from. Findings are reported according to the configured
//! [`ValidationLevel`]; list-shape divergence is always fatal.

use indexmap::IndexMap;
use tracing::warn;

use crate::ast::ext::TypeExt;
use crate::ast::static_graphql::Type;
use crate::candidates::{
    FieldCandidate, FieldConfigCandidate, InputFieldConfigCandidate, TypeCandidate,
};
use crate::config::{TypeMergingOptions, ValidationLevel};
use crate::error::TypeMergingError;
use crate::schema::{FieldConfig, InputValueConfig, Subschema, TypeKind};

type ErrorFactory = fn(String, String) -> TypeMergingError;

fn field_error(coordinate: String, message: String) -> TypeMergingError {
    TypeMergingError::FieldConsistency {
        coordinate,
        message,
    }
}

fn input_field_error(coordinate: String, message: String) -> TypeMergingError {
    TypeMergingError::InputFieldConsistency {
        coordinate,
        message,
    }
}

fn input_object_error(coordinate: String, message: String) -> TypeMergingError {
    TypeMergingError::InputObjectConsistency {
        coordinate,
        message,
    }
}

fn validation_message(
    message: String,
    namespace: &str,
    options: &TypeMergingOptions,
    make_error: ErrorFactory,
) -> Result<(), TypeMergingError> {
    let setting = format!("validation_scopes[\"{namespace}\"].validation_level");

    match options.validation_settings_for(namespace).validation_level() {
        ValidationLevel::Off => Ok(()),
        ValidationLevel::Error => Err(make_error(
            namespace.to_string(),
            format!(
                "{message} If this is intentional, you may disable this error by setting {setting} to \"warn\" or \"off\"."
            ),
        )),
        ValidationLevel::Warn => {
            warn!(
                namespace,
                "{message} To disable this warning or elevate it to an error, set {setting} to \"error\" or \"off\"."
            );
            Ok(())
        }
    }
}

/// An element (field, argument, input field) and the subgraph it was defined in.
struct TypedElement<'a> {
    element_type: &'a Type,
    subschema: &'a Subschema,
}

fn kind_in_any(subschemas: &[&Subschema], name: &str) -> Option<TypeKind> {
    subschemas.iter().find_map(|subschema| subschema.type_kind(name))
}

fn validate_type_consistency(
    final_type: &Type,
    candidates: &[TypedElement<'_>],
    definition_type: &str,
    namespace: &str,
    options: &TypeMergingOptions,
    make_error: ErrorFactory,
) -> Result<(), TypeMergingError> {
    let subschemas: Vec<&Subschema> = candidates.iter().map(|c| c.subschema).collect();
    let final_named_type = final_type.inner_type();
    let final_is_scalar = kind_in_any(&subschemas, final_named_type) == Some(TypeKind::Scalar);
    let final_is_list = final_type.has_list_type();
    let settings = options.validation_settings_for(namespace);

    for candidate in candidates {
        if final_is_list != candidate.element_type.has_list_type() {
            return Err(make_error(
                namespace.to_string(),
                format!(
                    "Definitions of {definition_type} \"{namespace}\" implement inconsistent list types across subschemas and cannot be merged."
                ),
            ));
        }

        let candidate_named_type = candidate.element_type.inner_type();
        if final_named_type == candidate_named_type {
            continue;
        }

        let proxiable_scalar = settings.is_proxiable_scalar(final_named_type, candidate_named_type);
        let both_scalars = final_is_scalar
            && candidate.subschema.type_kind(candidate_named_type) == Some(TypeKind::Scalar);

        if proxiable_scalar && !both_scalars {
            return Err(TypeMergingError::ProxiableScalarMismatch {
                coordinate: namespace.to_string(),
                merged: final_named_type.to_string(),
                candidate: candidate_named_type.to_string(),
            });
        }

        if !proxiable_scalar {
            validation_message(
                format!(
                    "Definitions of {definition_type} \"{namespace}\" implement inconsistent named types across subschemas. Merged definition uses \"{final_named_type}\", subgraph \"{}\" uses \"{candidate_named_type}\".",
                    candidate.subschema.name
                ),
                namespace,
                options,
                make_error,
            )?;
        }
    }

    Ok(())
}

/// Reports enums used in input positions whose values are not the same in every subgraph.
fn validate_input_enum_consistency(
    enum_name: &str,
    candidates: &[TypedElement<'_>],
    options: &TypeMergingOptions,
    make_error: ErrorFactory,
) -> Result<(), TypeMergingError> {
    let mut value_inclusion: IndexMap<&str, usize> = IndexMap::new();

    for candidate in candidates {
        let enum_type = candidate
            .subschema
            .type_by_name(candidate.element_type.inner_type())
            .and_then(|t| t.as_enum());

        if let Some(enum_type) = enum_type {
            for value in enum_type.values.keys() {
                *value_inclusion.entry(value.as_str()).or_default() += 1;
            }
        }
    }

    if value_inclusion
        .values()
        .any(|count| *count != candidates.len())
    {
        validation_message(
            format!(
                "Enum \"{enum_name}\" is used as an input with inconsistent values across subschemas. Consider marking this enum canonical in one subgraph."
            ),
            enum_name,
            options,
            make_error,
        )?;
    }

    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Position {
    Output,
    Input,
}

fn validate_nullability(
    final_type: &Type,
    candidate_types: &[&Type],
    element: &str,
    namespace: &str,
    position: Position,
    options: &TypeMergingOptions,
    make_error: ErrorFactory,
) -> Result<(), TypeMergingError> {
    let final_is_non_null = final_type.is_non_null();

    if options
        .validation_settings_for(namespace)
        .strict_null_comparison()
        && candidate_types
            .iter()
            .any(|t| t.is_non_null() != final_is_non_null)
    {
        return validation_message(
            format!(
                "Nullability of {element} \"{namespace}\" does not match across subschemas. Disable strict_null_comparison to permit this."
            ),
            namespace,
            options,
            make_error,
        );
    }

    if position == Position::Input {
        if !final_is_non_null && candidate_types.iter().any(|t| t.is_non_null()) {
            return validation_message(
                format!(
                    "Canonical definition of {element} \"{namespace}\" is nullable but non-null in other subschemas."
                ),
                namespace,
                options,
                make_error,
            );
        }
    } else if final_is_non_null && candidate_types.iter().any(|t| !t.is_non_null()) {
        return validation_message(
            format!(
                "Canonical definition of {element} \"{namespace}\" is non-null but nullable in other subschemas."
            ),
            namespace,
            options,
            make_error,
        );
    }

    Ok(())
}

/// Checks a merged output field: type shape, nullability, and every argument of the
/// merged field against the same argument in the other subgraphs.
pub fn validate_field_consistency(
    final_field: &FieldConfig,
    candidates: &[FieldConfigCandidate<'_>],
    options: &TypeMergingOptions,
) -> Result<(), TypeMergingError> {
    let Some(first) = candidates.first() else {
        return Ok(());
    };
    let namespace = first.coordinate();

    let elements: Vec<TypedElement<'_>> = candidates
        .iter()
        .map(|c| TypedElement {
            element_type: &c.field_config.field_type,
            subschema: c.type_candidate.subschema.as_ref(),
        })
        .collect();
    validate_type_consistency(
        &final_field.field_type,
        &elements,
        "field",
        &namespace,
        options,
        field_error,
    )?;

    let candidate_types: Vec<&Type> = elements.iter().map(|e| e.element_type).collect();
    validate_nullability(
        &final_field.field_type,
        &candidate_types,
        "field",
        &namespace,
        Position::Output,
        options,
        field_error,
    )?;

    let mut arg_candidates: IndexMap<&str, Vec<TypedElement<'_>>> = IndexMap::new();
    for candidate in candidates {
        for (arg_name, arg) in candidate.field_config.args.iter() {
            arg_candidates
                .entry(arg_name.as_str())
                .or_default()
                .push(TypedElement {
                    element_type: &arg.value_type,
                    subschema: candidate.type_candidate.subschema.as_ref(),
                });
        }
    }

    if arg_candidates
        .values()
        .any(|args| args.len() != candidates.len())
    {
        validation_message(
            format!(
                "Canonical definition of \"{namespace}\" omits arguments found in other subschemas. Consider setting canonical on the field."
            ),
            &namespace,
            options,
            field_error,
        )?;
    }

    for (arg_name, args) in arg_candidates.iter() {
        let Some(final_arg) = final_field.args.get(*arg_name) else {
            continue;
        };
        let arg_namespace = format!("{namespace}.{arg_name}");

        validate_type_consistency(
            &final_arg.value_type,
            args,
            "argument",
            &arg_namespace,
            options,
            field_error,
        )?;

        let arg_types: Vec<&Type> = args.iter().map(|e| e.element_type).collect();
        validate_nullability(
            &final_arg.value_type,
            &arg_types,
            "argument",
            &arg_namespace,
            Position::Input,
            options,
            field_error,
        )?;

        let subschemas: Vec<&Subschema> = args.iter().map(|a| a.subschema).collect();
        let arg_named_type = final_arg.value_type.inner_type();
        if kind_in_any(&subschemas, arg_named_type) == Some(TypeKind::Enum) {
            validate_input_enum_consistency(arg_named_type, args, options, field_error)?;
        }
    }

    Ok(())
}

/// Checks that every field of an input object is defined by every subgraph.
/// `field_inclusion` counts, per field name, how many candidates define it.
pub fn validate_input_object_consistency(
    field_inclusion: &IndexMap<String, usize>,
    candidates: &[TypeCandidate],
    options: &TypeMergingOptions,
) -> Result<(), TypeMergingError> {
    let Some(first) = candidates.first() else {
        return Ok(());
    };

    for (field_name, count) in field_inclusion.iter() {
        if *count != candidates.len() {
            let namespace = format!("{}.{}", first.type_name(), field_name);
            validation_message(
                format!(
                    "Definition of input object field \"{namespace}\" is not implemented by all subschemas. Consider setting canonical on the type, or allowing partial input objects."
                ),
                &namespace,
                options,
                input_object_error,
            )?;
        }
    }

    Ok(())
}

pub fn validate_input_field_consistency(
    final_input_field: &InputValueConfig,
    candidates: &[InputFieldConfigCandidate<'_>],
    options: &TypeMergingOptions,
) -> Result<(), TypeMergingError> {
    let Some(first) = candidates.first() else {
        return Ok(());
    };
    let namespace = first.coordinate();

    let elements: Vec<TypedElement<'_>> = candidates
        .iter()
        .map(|c| TypedElement {
            element_type: &c.input_field_config.value_type,
            subschema: c.type_candidate.subschema.as_ref(),
        })
        .collect();
    validate_type_consistency(
        &final_input_field.value_type,
        &elements,
        "input field",
        &namespace,
        options,
        input_field_error,
    )?;

    let candidate_types: Vec<&Type> = elements.iter().map(|e| e.element_type).collect();
    validate_nullability(
        &final_input_field.value_type,
        &candidate_types,
        "input field",
        &namespace,
        Position::Input,
        options,
        input_field_error,
    )?;

    let subschemas: Vec<&Subschema> = elements.iter().map(|e| e.subschema).collect();
    let named_type = final_input_field.value_type.inner_type();
    if kind_in_any(&subschemas, named_type) == Some(TypeKind::Enum) {
        validate_input_enum_consistency(named_type, &elements, options, input_field_error)?;
    }

    Ok(())
}

/// Counts, per input field name, how many of the candidate input objects define it.
pub fn input_field_inclusion<'a>(
    field_maps: impl IntoIterator<Item = &'a IndexMap<String, InputValueConfig>>,
) -> IndexMap<String, usize> {
    let mut inclusion: IndexMap<String, usize> = IndexMap::new();

    for fields in field_maps {
        for field_name in fields.keys() {
            *inclusion.entry(field_name.clone()).or_default() += 1;
        }
    }

    inclusion
}
