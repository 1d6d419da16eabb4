use tracing::instrument;

use crate::ast::merge::fold_ast_nodes;
use crate::ast::static_graphql as ast;
use crate::candidates::TypeCandidate;
use crate::error::TypeMergingError;
use crate::merger::fields::input_field_config_map_from_candidates;
use crate::merger::{expect_kind, merge_extensions, TypeMerger};
use crate::schema::{InputObjectType, NamedType};

#[instrument(level = "trace", skip(merger, candidates))]
pub(crate) fn merge_input_object_candidates(
    merger: &TypeMerger,
    type_name: &str,
    candidates: &[TypeCandidate],
) -> Result<InputObjectType, TypeMergingError> {
    let ordered = merger.ordered_candidates(candidates)?;
    let input_objects = expect_kind(&ordered, NamedType::as_input_object)?;

    let description = merger.merge_description(&ordered);
    let field_maps: Vec<_> = input_objects.iter().map(|i| &i.fields).collect();
    let fields = input_field_config_map_from_candidates(merger, &ordered, &field_maps)?;

    let mut ast_nodes: Vec<ast::InputObjectType> = input_objects
        .iter()
        .filter_map(|i| i.ast_node.clone())
        .collect();
    let field_ast_nodes: Vec<ast::InputValue> = fields
        .values()
        .filter_map(|field| field.ast_node.clone())
        .collect();
    if ast_nodes.len() > 1 && !field_ast_nodes.is_empty() {
        if let Some(last) = ast_nodes.last() {
            let pseudo_node = ast::InputObjectType {
                fields: field_ast_nodes,
                ..last.clone()
            };
            ast_nodes.push(pseudo_node);
        }
    }

    Ok(InputObjectType {
        name: type_name.to_string(),
        description,
        fields,
        extensions: merge_extensions(input_objects.iter().map(|i| &i.extensions)),
        ast_node: fold_ast_nodes(ast_nodes),
        extension_ast_nodes: input_objects
            .iter()
            .flat_map(|i| i.extension_ast_nodes.iter().cloned())
            .collect(),
    })
}
