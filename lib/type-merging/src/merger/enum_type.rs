use tracing::instrument;

use crate::ast::merge::fold_ast_nodes;
use crate::candidates::TypeCandidate;
use crate::error::TypeMergingError;
use crate::merger::fields::enum_value_config_map_from_candidates;
use crate::merger::{expect_kind, merge_extensions, TypeMerger};
use crate::schema::{EnumType, NamedType};

#[instrument(level = "trace", skip(merger, candidates))]
pub(crate) fn merge_enum_candidates(
    merger: &TypeMerger,
    type_name: &str,
    candidates: &[TypeCandidate],
) -> Result<EnumType, TypeMergingError> {
    let ordered = merger.ordered_candidates(candidates)?;
    let enums = expect_kind(&ordered, NamedType::as_enum)?;

    let value_maps: Vec<_> = enums.iter().map(|e| &e.values).collect();
    let values = enum_value_config_map_from_candidates(merger, &ordered, &value_maps)?;

    Ok(EnumType {
        name: type_name.to_string(),
        description: merger.merge_description(&ordered),
        values,
        extensions: merge_extensions(enums.iter().map(|e| &e.extensions)),
        ast_node: fold_ast_nodes(enums.iter().filter_map(|e| e.ast_node.clone()).collect()),
        extension_ast_nodes: enums
            .iter()
            .flat_map(|e| e.extension_ast_nodes.iter().cloned())
            .collect(),
    })
}
