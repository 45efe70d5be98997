use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::{debug, warn};

use crate::composite::CompositeEditor;
use crate::core::CompositeValue;
use crate::editor::EditorContext;
use crate::error::{InputRejection, PlotConfigError, PlotConfigResult};
use crate::interaction::CompositeAction;
use crate::render::{FormFrame, FormRenderer};
use crate::schema::SchemaCatalog;

use super::{CollectionKind, EditableCollection, PlotBuilderConfig, PlotConfig};

const GUIDE_PREFIX: &str = "guide_";

/// Owns a whole plot configuration for an editing session.
///
/// Mutations return the rebuilt `PlotConfig` when something changed, so the
/// host can forward it to whatever renders the plot.
pub struct PlotConfigEditor<R: FormRenderer> {
    renderer: R,
    config: PlotBuilderConfig,
    context: EditorContext,
    mapping: IndexMap<String, String>,
    layers: EditableCollection,
    scales: EditableCollection,
    themes: EditableCollection,
    facet: EditableCollection,
    coordinate: EditableCollection,
    guides: IndexMap<String, CompositeEditor>,
}

impl<R: FormRenderer> PlotConfigEditor<R> {
    pub fn new(renderer: R, config: PlotBuilderConfig) -> PlotConfigResult<Self> {
        Self::with_catalog(renderer, config, SchemaCatalog::builtin())
    }

    pub fn with_catalog(
        renderer: R,
        config: PlotBuilderConfig,
        catalog: Arc<SchemaCatalog>,
    ) -> PlotConfigResult<Self> {
        config.validate(&catalog)?;
        let context = EditorContext::new(catalog, config.editor);
        Ok(Self {
            renderer,
            config,
            context,
            mapping: IndexMap::new(),
            layers: EditableCollection::new(CollectionKind::Layers),
            scales: EditableCollection::new(CollectionKind::Scales),
            themes: EditableCollection::new(CollectionKind::Themes),
            facet: EditableCollection::new(CollectionKind::Facet),
            coordinate: EditableCollection::new(CollectionKind::Coordinate),
            guides: IndexMap::new(),
        })
    }

    /// Replaces the whole session state with a loaded configuration.
    pub fn load(&mut self, plot: &PlotConfig) -> PlotConfig {
        self.mapping = plot.mapping.clone();
        self.layers.load(&plot.layers, &self.context);
        self.scales.load(&plot.scales, &self.context);
        self.themes.load(&plot.themes, &self.context);
        self.facet
            .load(plot.facet.as_slice(), &self.context);
        self.coordinate
            .load(plot.coordinate.as_slice(), &self.context);
        self.guides = plot
            .guides
            .iter()
            .map(|(aesthetic, guide)| {
                let mut editor = self.guide_editor();
                editor.sync(&guide.to_value());
                (aesthetic.clone(), editor)
            })
            .collect();
        debug!(
            layers = self.layers.len(),
            scales = self.scales.len(),
            themes = self.themes.len(),
            "load plot config"
        );
        self.ensure_default_layer();
        self.plot_config()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn builder_config(&self) -> &PlotBuilderConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.context.catalog
    }

    /// Current configuration, rebuilt from every collection.
    #[must_use]
    pub fn plot_config(&self) -> PlotConfig {
        PlotConfig {
            mapping: self.mapping.clone(),
            layers: self.layers.values(),
            scales: self.scales.values(),
            themes: self.themes.values(),
            facet: self.facet.values().into_iter().next(),
            coordinate: self.coordinate.values().into_iter().next(),
            guides: self
                .guides
                .iter()
                .filter_map(|(aesthetic, editor)| {
                    editor
                        .composite_value()
                        .map(|guide| (aesthetic.clone(), guide))
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn mapping(&self) -> &IndexMap<String, String> {
        &self.mapping
    }

    /// Maps an aesthetic to a data column; an empty column clears the mapping.
    pub fn set_mapping(&mut self, aesthetic: &str, column: &str) -> PlotConfig {
        if column.is_empty() {
            self.mapping.shift_remove(aesthetic);
        } else {
            self.mapping.insert(aesthetic.to_owned(), column.to_owned());
        }
        debug!(aesthetic, column, "set aesthetic mapping");
        self.ensure_default_layer();
        self.plot_config()
    }

    pub fn remove_mapping(&mut self, aesthetic: &str) -> PlotConfig {
        self.set_mapping(aesthetic, "")
    }

    #[must_use]
    pub fn collection(&self, kind: CollectionKind) -> &EditableCollection {
        match kind {
            CollectionKind::Layers => &self.layers,
            CollectionKind::Scales => &self.scales,
            CollectionKind::Themes => &self.themes,
            CollectionKind::Facet => &self.facet,
            CollectionKind::Coordinate => &self.coordinate,
        }
    }

    fn collection_mut(&mut self, kind: CollectionKind) -> &mut EditableCollection {
        match kind {
            CollectionKind::Layers => &mut self.layers,
            CollectionKind::Scales => &mut self.scales,
            CollectionKind::Themes => &mut self.themes,
            CollectionKind::Facet => &mut self.facet,
            CollectionKind::Coordinate => &mut self.coordinate,
        }
    }

    /// Types the add dialog offers for `kind`, filtered by search text.
    #[must_use]
    pub fn available_types(&self, kind: CollectionKind, search: &str) -> Vec<String> {
        kind.available_types(&self.context.catalog, search)
    }

    #[must_use]
    pub fn items(&self, kind: CollectionKind) -> Vec<CompositeValue> {
        self.collection(kind).values()
    }

    #[must_use]
    pub fn selected_index(&self, kind: CollectionKind) -> Option<usize> {
        self.collection(kind).selected()
    }

    pub fn add_item(&mut self, kind: CollectionKind, type_name: &str) -> PlotConfigResult<usize> {
        let context = self.context.clone();
        self.collection_mut(kind).push(type_name, &context)
    }

    /// Removes one item. Removing the last layer while a mapping is set
    /// brings back the default layer.
    pub fn remove_item(
        &mut self,
        kind: CollectionKind,
        index: usize,
    ) -> PlotConfigResult<CompositeValue> {
        let removed = self.collection_mut(kind).remove(index)?;
        if kind == CollectionKind::Layers {
            self.ensure_default_layer();
        }
        Ok(removed)
    }

    /// Drag-and-drop reorder.
    pub fn move_item(
        &mut self,
        kind: CollectionKind,
        from: usize,
        to: usize,
    ) -> PlotConfigResult<()> {
        self.collection_mut(kind).move_item(from, to)
    }

    pub fn select_item(&mut self, kind: CollectionKind, index: usize) -> PlotConfigResult<()> {
        self.collection_mut(kind).select(index)
    }

    /// Applies an edit to one item. Rejected edits leave the config unchanged.
    pub fn edit_item(
        &mut self,
        kind: CollectionKind,
        index: usize,
        action: CompositeAction,
    ) -> PlotConfigResult<Option<PlotConfig>> {
        let result = self.collection_mut(kind).apply(index, action)?;
        Ok(self.changed(kind.label(), result))
    }

    /// Applies an edit to the item shown in the editing pane.
    pub fn edit_selected(
        &mut self,
        kind: CollectionKind,
        action: CompositeAction,
    ) -> PlotConfigResult<Option<PlotConfig>> {
        let collection = self.collection(kind);
        let index = collection
            .selected()
            .ok_or(PlotConfigError::IndexOutOfRange {
                collection: kind.label(),
                index: 0,
                len: collection.len(),
            })?;
        self.edit_item(kind, index, action)
    }

    /// Form of the selected item's arguments.
    #[must_use]
    pub fn selected_frame(&self, kind: CollectionKind) -> Option<FormFrame> {
        self.collection(kind)
            .selected_item()
            .and_then(CompositeEditor::frame)
    }

    /// Draws the selected item's form. Returns `false` when nothing is selected.
    pub fn render_selected(&mut self, kind: CollectionKind) -> PlotConfigResult<bool> {
        let Some(frame) = self.selected_frame(kind) else {
            return Ok(false);
        };
        self.renderer.render(&frame)?;
        Ok(true)
    }

    #[must_use]
    pub fn guide_types(&self, search: &str) -> Vec<String> {
        self.context
            .catalog
            .search(|type_name| type_name.starts_with(GUIDE_PREFIX), search)
    }

    /// Sets the guide of an aesthetic, resetting its arguments.
    pub fn set_guide(&mut self, aesthetic: &str, type_name: &str) -> PlotConfigResult<PlotConfig> {
        if !type_name.starts_with(GUIDE_PREFIX) || !self.context.catalog.contains(type_name) {
            return Err(PlotConfigError::UnknownType {
                collection: "guides",
                type_name: type_name.to_owned(),
            });
        }
        let mut editor = self.guide_editor();
        editor
            .apply(CompositeAction::SelectType(type_name.to_owned()))
            .map_err(|reason| PlotConfigError::InvalidData(reason.to_string()))?;
        self.guides.insert(aesthetic.to_owned(), editor);
        debug!(aesthetic, type_name, "set guide");
        Ok(self.plot_config())
    }

    pub fn remove_guide(&mut self, aesthetic: &str) -> Option<CompositeValue> {
        self.guides
            .shift_remove(aesthetic)
            .and_then(|editor| editor.composite_value())
    }

    pub fn edit_guide(
        &mut self,
        aesthetic: &str,
        action: CompositeAction,
    ) -> PlotConfigResult<Option<PlotConfig>> {
        let editor = self.guides.get_mut(aesthetic).ok_or_else(|| {
            PlotConfigError::InvalidData(format!("no guide is set for aesthetic `{aesthetic}`"))
        })?;
        let result = editor.apply(action);
        Ok(self.changed("guides", result))
    }

    fn guide_editor(&self) -> CompositeEditor {
        CompositeEditor::for_types(self.guide_types(""), self.context.clone())
    }

    fn changed(
        &self,
        collection: &'static str,
        result: Result<Option<Value>, InputRejection>,
    ) -> Option<PlotConfig> {
        match result {
            Ok(Some(_)) => Some(self.plot_config()),
            Ok(None) => None,
            Err(reason) => {
                debug!(collection, reason = %reason, "item edit rejected");
                None
            }
        }
    }

    fn ensure_default_layer(&mut self) {
        if !self.config.synthesize_default_layer
            || self.mapping.is_empty()
            || !self.layers.is_empty()
        {
            return;
        }
        let type_name = self.config.default_layer_type.clone();
        let context = self.context.clone();
        match self.layers.push(&type_name, &context) {
            Ok(_) => debug!(type_name = %type_name, "synthesized default layer"),
            Err(err) => warn!(error = %err, "skipping default layer synthesis"),
        }
    }
}
