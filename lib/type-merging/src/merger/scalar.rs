use tracing::instrument;

use crate::ast::merge::fold_ast_nodes;
use crate::candidates::TypeCandidate;
use crate::error::TypeMergingError;
use crate::merger::{expect_kind, merge_extensions, TypeMerger};
use crate::schema::{NamedType, ScalarType};

/// Coercion functions come from the last candidate (the canonical one, if any), even when
/// it leaves them undefined. `specified_by_url` is the first one found in the given
/// candidate order.
#[instrument(level = "trace", skip(merger, candidates))]
pub(crate) fn merge_scalar_candidates(
    merger: &TypeMerger,
    type_name: &str,
    candidates: &[TypeCandidate],
) -> Result<ScalarType, TypeMergingError> {
    let specified_by_url = expect_kind(candidates, NamedType::as_scalar)?
        .iter()
        .find_map(|s| s.specified_by_url.clone());

    let ordered = merger.ordered_candidates(candidates)?;
    let scalars = expect_kind(&ordered, NamedType::as_scalar)?;

    let last = scalars.last();

    Ok(ScalarType {
        name: type_name.to_string(),
        description: merger.merge_description(&ordered),
        specified_by_url,
        serialize: last.and_then(|s| s.serialize.clone()),
        parse_value: last.and_then(|s| s.parse_value.clone()),
        parse_literal: last.and_then(|s| s.parse_literal.clone()),
        extensions: merge_extensions(scalars.iter().map(|s| &s.extensions)),
        ast_node: fold_ast_nodes(scalars.iter().filter_map(|s| s.ast_node.clone()).collect()),
        extension_ast_nodes: scalars
            .iter()
            .flat_map(|s| s.extension_ast_nodes.iter().cloned())
            .collect(),
    })
}
