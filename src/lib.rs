//! plot-builder: sparse parameter-tree editor for plot configurations.
//!
//! Editors mirror exactly the keys a configuration sets. Every local edit
//! rebuilds a sparse JSON object from the active fields, composite fields
//! recurse into nested editors, and renderers draw the resulting form frames.

pub mod api;
pub mod composite;
pub mod core;
pub mod editor;
pub mod error;
pub mod field;
pub mod interaction;
pub mod render;
pub mod schema;
pub mod telemetry;

pub use crate::api::{CollectionKind, PlotBuilderConfig, PlotConfig, PlotConfigEditor};
pub use crate::composite::CompositeEditor;
pub use crate::core::{CompositeValue, FieldDescriptor, FieldKind, SparseConfigObject};
pub use crate::editor::{EditOutcome, EditorConfig, EditorContext, ParamSetEditor};
pub use crate::error::{InputRejection, PlotConfigError, PlotConfigResult};
pub use crate::interaction::{CompositeAction, FieldInput, ParamSetAction};
pub use crate::schema::SchemaCatalog;
