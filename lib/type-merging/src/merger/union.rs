use tracing::instrument;

use crate::ast::merge::fold_ast_nodes;
use crate::candidates::TypeCandidate;
use crate::error::TypeMergingError;
use crate::merger::{expect_kind, merge_extensions, TypeMerger};
use crate::schema::{NamedType, UnionType};

#[instrument(level = "trace", skip(merger, candidates))]
pub(crate) fn merge_union_candidates(
    merger: &TypeMerger,
    type_name: &str,
    candidates: &[TypeCandidate],
) -> Result<UnionType, TypeMergingError> {
    let ordered = merger.ordered_candidates(candidates)?;
    let unions = expect_kind(&ordered, NamedType::as_union)?;

    let mut types: Vec<String> = vec![];
    for member in unions.iter().flat_map(|u| u.types.iter()) {
        if !types.contains(member) {
            types.push(member.clone());
        }
    }

    Ok(UnionType {
        name: type_name.to_string(),
        description: merger.merge_description(&ordered),
        types,
        extensions: merge_extensions(unions.iter().map(|u| &u.extensions)),
        ast_node: fold_ast_nodes(unions.iter().filter_map(|u| u.ast_node.clone()).collect()),
        extension_ast_nodes: unions
            .iter()
            .flat_map(|u| u.extension_ast_nodes.iter().cloned())
            .collect(),
    })
}
