use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::composite::CompositeEditor;
use crate::core::CompositeValue;
use crate::editor::EditorContext;
use crate::error::{InputRejection, PlotConfigError, PlotConfigResult};
use crate::interaction::CompositeAction;
use crate::schema::SchemaCatalog;

/// Ordered parts of a plot that the orchestrator edits one item at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    Layers,
    Scales,
    Themes,
    /// At most one item.
    Facet,
    /// At most one item.
    Coordinate,
}

impl CollectionKind {
    pub const ALL: [Self; 5] = [
        Self::Layers,
        Self::Scales,
        Self::Themes,
        Self::Facet,
        Self::Coordinate,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Layers => "layers",
            Self::Scales => "scales",
            Self::Themes => "themes",
            Self::Facet => "facet",
            Self::Coordinate => "coordinate",
        }
    }

    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Facet | Self::Coordinate)
    }

    /// Whether a catalog type belongs in this collection.
    #[must_use]
    pub fn accepts(self, type_name: &str) -> bool {
        match self {
            Self::Layers => type_name.starts_with("geom_"),
            Self::Scales => type_name.starts_with("scale_"),
            Self::Themes => {
                type_name == "theme" || type_name == "labs" || type_name.starts_with("theme_")
            }
            Self::Facet => type_name.starts_with("facet_"),
            Self::Coordinate => type_name.starts_with("coord_"),
        }
    }

    /// Catalog types offered by the add dialog, filtered by search text.
    #[must_use]
    pub fn available_types(self, catalog: &SchemaCatalog, search: &str) -> Vec<String> {
        catalog.search(|type_name| self.accepts(type_name), search)
    }
}

/// Items of one collection plus the index shown in the single editing pane.
#[derive(Debug, Clone)]
pub struct EditableCollection {
    kind: CollectionKind,
    items: Vec<CompositeEditor>,
    selected: Option<usize>,
}

impl EditableCollection {
    #[must_use]
    pub fn new(kind: CollectionKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
            selected: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&CompositeEditor> {
        self.items.get(index)
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&CompositeEditor> {
        self.selected.and_then(|index| self.items.get(index))
    }

    #[must_use]
    pub fn values(&self) -> Vec<CompositeValue> {
        self.items
            .iter()
            .filter_map(CompositeEditor::composite_value)
            .collect()
    }

    pub(crate) fn load(&mut self, values: &[CompositeValue], context: &EditorContext) {
        self.items = values
            .iter()
            .map(|value| self.editor_for(&value.to_value(), context))
            .collect();
        self.selected = if self.items.is_empty() { None } else { Some(0) };
    }

    /// Appends a new item (replacing the item of a single-slot collection) and selects it.
    pub(crate) fn push(
        &mut self,
        type_name: &str,
        context: &EditorContext,
    ) -> PlotConfigResult<usize> {
        if !self.kind.accepts(type_name) || !context.catalog.contains(type_name) {
            return Err(PlotConfigError::UnknownType {
                collection: self.kind.label(),
                type_name: type_name.to_owned(),
            });
        }
        let mut editor = CompositeEditor::for_types(
            self.kind.available_types(&context.catalog, ""),
            context.clone(),
        );
        editor
            .apply(CompositeAction::SelectType(type_name.to_owned()))
            .map_err(|reason| PlotConfigError::InvalidData(reason.to_string()))?;
        if self.kind.is_single() {
            self.items.clear();
        }
        self.items.push(editor);
        let index = self.items.len() - 1;
        self.selected = Some(index);
        debug!(collection = self.kind.label(), type_name, index, "add item");
        Ok(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> PlotConfigResult<CompositeValue> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        self.selected = match self.selected {
            _ if self.items.is_empty() => None,
            Some(selected) if selected > index => Some(selected - 1),
            Some(selected) if selected == index => Some(index.saturating_sub(1)),
            other => other,
        };
        debug!(collection = self.kind.label(), index, "remove item");
        Ok(removed
            .composite_value()
            .unwrap_or_else(|| CompositeValue::new(String::new())))
    }

    /// Array move: the item at `from` ends up at `to`; selection follows its item.
    pub(crate) fn move_item(&mut self, from: usize, to: usize) -> PlotConfigResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        if from == to {
            return Ok(());
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.selected = self.selected.map(|selected| {
            if selected == from {
                to
            } else if from < selected && selected <= to {
                selected - 1
            } else if to <= selected && selected < from {
                selected + 1
            } else {
                selected
            }
        });
        debug!(collection = self.kind.label(), from, to, "move item");
        Ok(())
    }

    pub(crate) fn select(&mut self, index: usize) -> PlotConfigResult<()> {
        self.check_index(index)?;
        self.selected = Some(index);
        Ok(())
    }

    pub(crate) fn apply(
        &mut self,
        index: usize,
        action: CompositeAction,
    ) -> PlotConfigResult<Result<Option<Value>, InputRejection>> {
        self.check_index(index)?;
        Ok(self.items[index].apply(action))
    }

    fn editor_for(&self, value: &Value, context: &EditorContext) -> CompositeEditor {
        let mut editor = CompositeEditor::for_types(
            self.kind.available_types(&context.catalog, ""),
            context.clone(),
        );
        editor.sync(value);
        editor
    }

    fn check_index(&self, index: usize) -> PlotConfigResult<()> {
        if index >= self.items.len() {
            return Err(PlotConfigError::IndexOutOfRange {
                collection: self.kind.label(),
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}
