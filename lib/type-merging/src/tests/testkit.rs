use std::sync::{Arc, Once};

use lazy_static::lazy_static;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::candidates::{collect_type_candidates, SubgraphSource, TypeCandidate};
use crate::config::{SubschemaConfig, TypeMergingOptions, ValidationLevel, ValidationSettings};
use crate::error::TypeMergingError;
use crate::merger::TypeMerger;
use crate::schema::{NamedType, Subschema};

fn init_test_logger_internal() {
    let tree_layer = tracing_tree::HierarchicalLayer::new(2)
        .with_bracketed_fields(true)
        .with_deferred_spans(false)
        .with_wraparound(25)
        .with_indent_lines(true)
        .with_timer(tracing_tree::time::Uptime::default())
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_targets(false);

    tracing_subscriber::registry()
        .with(tree_layer)
        .with(EnvFilter::from_default_env())
        .init();
}

lazy_static! {
    static ref TRACING_INIT: Once = Once::new();
}

pub fn init_logger() {
    TRACING_INIT.call_once(|| {
        init_test_logger_internal();
    });
}

pub fn subgraph(name: &str, sdl: &str) -> SubgraphSource {
    SubgraphSource::from_sdl(name, sdl).expect("failed to parse subgraph")
}

/// The candidates of `type_name`, in subgraph order.
pub fn candidates_of(sources: &[SubgraphSource], type_name: &str) -> Vec<TypeCandidate> {
    collect_type_candidates(sources)
        .swap_remove(type_name)
        .expect("type is not defined by any subgraph")
}

/// A candidate built from a hand-made type, for things SDL cannot express
/// (extensions, coercion functions).
pub fn candidate(
    subgraph_name: &str,
    named_type: NamedType,
    config: Option<SubschemaConfig>,
) -> TypeCandidate {
    let named_type = Arc::new(named_type);
    let subschema = Subschema {
        name: subgraph_name.to_string(),
        types: [(named_type.name().to_string(), named_type.clone())]
            .into_iter()
            .collect(),
    };

    TypeCandidate::new(named_type, Arc::new(subschema), config.map(Arc::new))
}

pub fn merge_type(
    options: TypeMergingOptions,
    sources: &[SubgraphSource],
    type_name: &str,
) -> Result<NamedType, TypeMergingError> {
    let candidates = candidates_of(sources, type_name);
    TypeMerger::new(options).merge_type_candidates(type_name, &candidates)
}

pub fn with_validation_level(level: ValidationLevel) -> TypeMergingOptions {
    TypeMergingOptions {
        validation_settings: ValidationSettings {
            validation_level: Some(level),
            ..Default::default()
        },
        ..Default::default()
    }
}
