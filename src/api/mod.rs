mod builder_config;
mod collection;
mod json_contract;
mod plot_config;
mod plot_editor;

pub use builder_config::PlotBuilderConfig;
pub use collection::{CollectionKind, EditableCollection};
pub use json_contract::{PLOT_CONFIG_JSON_SCHEMA_V1, PlotConfigJsonContractV1};
pub use plot_config::PlotConfig;
pub use plot_editor::PlotConfigEditor;
