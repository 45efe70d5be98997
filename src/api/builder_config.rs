use serde::{Deserialize, Serialize};

use crate::editor::EditorConfig;
use crate::error::{PlotConfigError, PlotConfigResult};
use crate::schema::SchemaCatalog;

use super::CollectionKind;

/// Public builder bootstrap configuration.
///
/// This type is serializable so host applications can persist/load editor
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBuilderConfig {
    #[serde(default)]
    pub editor: EditorConfig,
    /// Add a default layer once an aesthetic mapping exists and no layer does.
    #[serde(default = "default_synthesize_default_layer")]
    pub synthesize_default_layer: bool,
    #[serde(default = "default_layer_type")]
    pub default_layer_type: String,
}

impl Default for PlotBuilderConfig {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            synthesize_default_layer: default_synthesize_default_layer(),
            default_layer_type: default_layer_type(),
        }
    }
}

impl PlotBuilderConfig {
    #[must_use]
    pub fn with_editor(mut self, editor: EditorConfig) -> Self {
        self.editor = editor;
        self
    }

    #[must_use]
    pub fn with_synthesize_default_layer(mut self, enabled: bool) -> Self {
        self.synthesize_default_layer = enabled;
        self
    }

    #[must_use]
    pub fn with_default_layer_type(mut self, type_name: impl Into<String>) -> Self {
        self.default_layer_type = type_name.into();
        self
    }

    pub fn validate(&self, catalog: &SchemaCatalog) -> PlotConfigResult<()> {
        if self.editor.max_colors == 0 {
            return Err(PlotConfigError::InvalidData(
                "editor.max_colors must be > 0".to_owned(),
            ));
        }
        if self.synthesize_default_layer
            && !(CollectionKind::Layers.accepts(&self.default_layer_type)
                && catalog.contains(&self.default_layer_type))
        {
            return Err(PlotConfigError::UnknownType {
                collection: CollectionKind::Layers.label(),
                type_name: self.default_layer_type.clone(),
            });
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> PlotConfigResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to parse builder config json: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> PlotConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to serialize builder config json: {e}"))
        })
    }
}

fn default_synthesize_default_layer() -> bool {
    true
}

fn default_layer_type() -> String {
    "geom_point".to_owned()
}
