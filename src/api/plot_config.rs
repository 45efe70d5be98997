use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::CompositeValue;

/// Root aggregate of an editing session.
///
/// Every collection holds `{type, arguments}` nodes in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Aesthetic name to data column, e.g. `x -> "displ"`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub mapping: IndexMap<String, String>,
    #[serde(default)]
    pub layers: Vec<CompositeValue>,
    #[serde(default)]
    pub scales: Vec<CompositeValue>,
    #[serde(default)]
    pub themes: Vec<CompositeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facet: Option<CompositeValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<CompositeValue>,
    /// Guide per aesthetic.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub guides: IndexMap<String, CompositeValue>,
}

impl PlotConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_mapping(mut self, aesthetic: impl Into<String>, column: impl Into<String>) -> Self {
        self.mapping.insert(aesthetic.into(), column.into());
        self
    }

    #[must_use]
    pub fn with_layer(mut self, layer: CompositeValue) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: CompositeValue) -> Self {
        self.scales.push(scale);
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: CompositeValue) -> Self {
        self.themes.push(theme);
        self
    }

    #[must_use]
    pub fn with_facet(mut self, facet: CompositeValue) -> Self {
        self.facet = Some(facet);
        self
    }

    #[must_use]
    pub fn with_coordinate(mut self, coordinate: CompositeValue) -> Self {
        self.coordinate = Some(coordinate);
        self
    }

    #[must_use]
    pub fn with_guide(mut self, aesthetic: impl Into<String>, guide: CompositeValue) -> Self {
        self.guides.insert(aesthetic.into(), guide);
        self
    }
}
