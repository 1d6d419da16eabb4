use std::sync::Arc;

use crate::ast::static_graphql::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct CoercionError(pub String);

/// Converts an internal value into its response representation.
pub type SerializeFn =
    Arc<dyn Fn(&serde_json::Value) -> Result<serde_json::Value, CoercionError> + Send + Sync>;
/// Converts a variable value into its internal representation.
pub type ParseValueFn =
    Arc<dyn Fn(&serde_json::Value) -> Result<serde_json::Value, CoercionError> + Send + Sync>;
/// Converts an inline literal into its internal representation.
pub type ParseLiteralFn = Arc<dyn Fn(&Value) -> Result<serde_json::Value, CoercionError> + Send + Sync>;

pub(crate) fn same_function<F: ?Sized>(left: &Option<Arc<F>>, right: &Option<Arc<F>>) -> bool {
    match (left, right) {
        (Some(left), Some(right)) => Arc::ptr_eq(left, right),
        (None, None) => true,
        _ => false,
    }
}
