mod active_field;
mod config;
mod param_set;

use std::sync::Arc;

use crate::schema::SchemaCatalog;

pub use active_field::ActiveField;
pub use config::EditorConfig;
pub use param_set::{EditOutcome, ParamSetEditor, serialize_fields};

/// Shared, read-only inputs handed down to every nested editor.
#[derive(Debug, Clone)]
pub struct EditorContext {
    pub catalog: Arc<SchemaCatalog>,
    pub config: EditorConfig,
}

impl EditorContext {
    #[must_use]
    pub fn new(catalog: Arc<SchemaCatalog>, config: EditorConfig) -> Self {
        Self { catalog, config }
    }

    /// Builtin catalog with default coercion settings.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(SchemaCatalog::builtin(), EditorConfig::default())
    }
}
