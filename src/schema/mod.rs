//! Static parameter tables keyed by type name.
//!
//! Lookups are pure and total: unknown type names yield an empty slice.

mod coords;
mod elements;
mod facets;
mod guides;
mod heatmap;
mod layers;
mod positions;
mod scales;
mod strips;
mod themes;

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::core::{FieldDescriptor, FieldKind, duplicate_field_name};
use crate::error::{PlotConfigError, PlotConfigResult};

static BUILTIN: LazyLock<Arc<SchemaCatalog>> =
    LazyLock::new(|| Arc::new(SchemaCatalog::with_builtin_types()));

/// Registry of composite type names and their editable fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaCatalog {
    types: IndexMap<String, Vec<FieldDescriptor>>,
}

impl SchemaCatalog {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shared catalog of every builtin ggplot2, ggh4x, ComplexHeatmap and circlize table.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        Arc::clone(&BUILTIN)
    }

    /// Owned copy of the builtin tables, for extension with custom types.
    #[must_use]
    pub fn with_builtin_types() -> Self {
        let mut catalog = Self::empty();
        for (type_name, descriptors) in elements::tables()
            .into_iter()
            .chain(positions::tables())
            .chain(strips::tables())
            .chain(layers::tables())
            .chain(scales::tables())
            .chain(themes::tables())
            .chain(facets::tables())
            .chain(coords::tables())
            .chain(guides::tables())
            .chain(heatmap::tables())
        {
            catalog.types.insert(type_name.to_owned(), descriptors);
        }
        catalog
    }

    /// Parses a `{type_name: [descriptor, ...]}` document.
    pub fn from_json_str(input: &str) -> PlotConfigResult<Self> {
        let parsed: IndexMap<String, Vec<FieldDescriptor>> = serde_json::from_str(input)
            .map_err(|e| PlotConfigError::InvalidData(format!("failed to parse catalog json: {e}")))?;
        let mut catalog = Self::empty();
        for (type_name, descriptors) in parsed {
            catalog.register(type_name, descriptors)?;
        }
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> PlotConfigResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotConfigError::InvalidData(format!("failed to serialize catalog json: {e}"))
        })
    }

    /// Adds or replaces a type. Field names must be unique within the type.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        descriptors: Vec<FieldDescriptor>,
    ) -> PlotConfigResult<()> {
        let type_name = type_name.into();
        if type_name.is_empty() {
            return Err(PlotConfigError::InvalidData(
                "catalog type name must not be empty".to_owned(),
            ));
        }
        if let Some(duplicate) = duplicate_field_name(&descriptors) {
            return Err(PlotConfigError::InvalidData(format!(
                "type `{type_name}` declares field `{duplicate}` more than once"
            )));
        }
        self.types.insert(type_name, descriptors);
        Ok(())
    }

    /// Editable fields of a type; empty for unknown names.
    #[must_use]
    pub fn field_descriptors(&self, type_name: &str) -> &[FieldDescriptor] {
        self.types.get(type_name).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Registered variants of a family, in registration order.
    #[must_use]
    pub fn types_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.type_names()
            .filter(|type_name| type_name.len() > prefix.len() && type_name.starts_with(prefix))
            .map(str::to_owned)
            .collect()
    }

    /// Types accepted by `matches` whose name contains `query`, ignoring case.
    #[must_use]
    pub fn search(&self, matches: impl Fn(&str) -> bool, query: &str) -> Vec<String> {
        let query = query.trim().to_lowercase();
        self.type_names()
            .filter(|type_name| matches(type_name))
            .filter(|type_name| query.is_empty() || type_name.to_lowercase().contains(&query))
            .map(str::to_owned)
            .collect()
    }
}

/// Free function form of [`SchemaCatalog::field_descriptors`] over the builtin tables.
#[must_use]
pub fn field_descriptors(type_name: &str) -> Vec<FieldDescriptor> {
    SchemaCatalog::builtin().field_descriptors(type_name).to_vec()
}

type Table = (&'static str, Vec<FieldDescriptor>);

fn num(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::Number)
}

fn int(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::Number).with_step(1.0)
}

fn text(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::String)
}

fn flag(name: &str, default: bool) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::Boolean).with_default(Value::Bool(default))
}

fn color(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldKind::Color)
}

fn select(name: &str, options: &[&str]) -> FieldDescriptor {
    FieldDescriptor::select(name, options.iter().copied())
}

fn unit_interval(name: &str, default: f64) -> FieldDescriptor {
    num(name)
        .with_default(json!(default))
        .with_bounds(0.0, 1.0)
        .with_step(0.05)
}

fn kind(name: &str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor::new(name, kind)
}
