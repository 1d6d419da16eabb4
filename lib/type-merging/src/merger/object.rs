use indexmap::IndexMap;
use tracing::instrument;

use crate::ast::merge::fold_ast_nodes;
use crate::ast::static_graphql as ast;
use crate::candidates::TypeCandidate;
use crate::error::TypeMergingError;
use crate::merger::fields::field_config_map_from_candidates;
use crate::merger::{expect_kind, merge_extensions, TypeMerger};
use crate::schema::{FieldConfig, InterfaceType, NamedType, ObjectType};

/// Union of interface names, first occurrence keeps its position.
fn merge_interfaces<'a>(all: impl IntoIterator<Item = &'a Vec<String>>) -> Vec<String> {
    let mut interfaces: Vec<String> = vec![];

    for names in all {
        for name in names {
            if !interfaces.contains(name) {
                interfaces.push(name.clone());
            }
        }
    }

    interfaces
}

fn merged_field_ast_nodes(fields: &IndexMap<String, FieldConfig>) -> Vec<ast::Field> {
    fields
        .values()
        .filter_map(|field| field.ast_node.clone())
        .collect()
}

#[instrument(level = "trace", skip(merger, candidates))]
pub(crate) fn merge_object_candidates(
    merger: &TypeMerger,
    type_name: &str,
    candidates: &[TypeCandidate],
) -> Result<ObjectType, TypeMergingError> {
    let ordered = merger.ordered_candidates(candidates)?;
    let objects = expect_kind(&ordered, NamedType::as_object)?;

    let description = merger.merge_description(&ordered);
    let field_maps: Vec<_> = objects.iter().map(|o| &o.fields).collect();
    let fields = field_config_map_from_candidates(merger, &ordered, &field_maps)?;
    let interfaces = merge_interfaces(objects.iter().map(|o| &o.interfaces));

    let mut ast_nodes: Vec<ast::ObjectType> =
        objects.iter().filter_map(|o| o.ast_node.clone()).collect();
    let field_ast_nodes = merged_field_ast_nodes(&fields);
    if ast_nodes.len() > 1 && !field_ast_nodes.is_empty() {
        if let Some(last) = ast_nodes.last() {
            let pseudo_node = ast::ObjectType {
                fields: field_ast_nodes,
                ..last.clone()
            };
            ast_nodes.push(pseudo_node);
        }
    }

    Ok(ObjectType {
        name: type_name.to_string(),
        description,
        fields,
        interfaces,
        extensions: merge_extensions(objects.iter().map(|o| &o.extensions)),
        ast_node: fold_ast_nodes(ast_nodes),
        extension_ast_nodes: objects
            .iter()
            .flat_map(|o| o.extension_ast_nodes.iter().cloned())
            .collect(),
    })
}

#[instrument(level = "trace", skip(merger, candidates))]
pub(crate) fn merge_interface_candidates(
    merger: &TypeMerger,
    type_name: &str,
    candidates: &[TypeCandidate],
) -> Result<InterfaceType, TypeMergingError> {
    let ordered = merger.ordered_candidates(candidates)?;
    let interfaces_defs = expect_kind(&ordered, NamedType::as_interface)?;

    let description = merger.merge_description(&ordered);
    let field_maps: Vec<_> = interfaces_defs.iter().map(|i| &i.fields).collect();
    let fields = field_config_map_from_candidates(merger, &ordered, &field_maps)?;
    let interfaces = merge_interfaces(interfaces_defs.iter().map(|i| &i.interfaces));

    let mut ast_nodes: Vec<ast::InterfaceType> = interfaces_defs
        .iter()
        .filter_map(|i| i.ast_node.clone())
        .collect();
    let field_ast_nodes = merged_field_ast_nodes(&fields);
    if ast_nodes.len() > 1 && !field_ast_nodes.is_empty() {
        if let Some(last) = ast_nodes.last() {
            let pseudo_node = ast::InterfaceType {
                fields: field_ast_nodes,
                ..last.clone()
            };
            ast_nodes.push(pseudo_node);
        }
    }

    Ok(InterfaceType {
        name: type_name.to_string(),
        description,
        fields,
        interfaces,
        extensions: merge_extensions(interfaces_defs.iter().map(|i| &i.extensions)),
        ast_node: fold_ast_nodes(ast_nodes),
        extension_ast_nodes: interfaces_defs
            .iter()
            .flat_map(|i| i.extension_ast_nodes.iter().cloned())
            .collect(),
    })
}
