use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PlotConfigError, PlotConfigResult};
use crate::interaction::ListValueType;

/// Fully materialized view of one parameter set, ready for a widget toolkit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FormFrame {
    /// Styling hint: the form is drawn inside a composite editor.
    pub nested: bool,
    pub rows: Vec<FieldRow>,
    /// Schema fields that can still be added.
    pub addable: Vec<String>,
}

impl FormFrame {
    /// Checks the frame invariants a renderer relies on.
    pub fn validate(&self) -> PlotConfigResult<()> {
        for (index, row) in self.rows.iter().enumerate() {
            if self.rows[..index].iter().any(|earlier| earlier.name == row.name) {
                return Err(PlotConfigError::InvalidData(format!(
                    "form row `{}` appears more than once",
                    row.name
                )));
            }
            if let FieldView::Composite(composite) = &row.view {
                if let Some(form) = &composite.form {
                    form.validate()?;
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn row(&self, name: &str) -> Option<&FieldRow> {
        self.rows.iter().find(|row| row.name == name)
    }

    /// Number of rows including every nested form.
    #[must_use]
    pub fn total_rows(&self) -> usize {
        self.rows
            .iter()
            .map(|row| match &row.view {
                FieldView::Composite(CompositeView {
                    form: Some(form), ..
                }) => 1 + form.total_rows(),
                _ => 1,
            })
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRow {
    pub name: String,
    /// Kind name from the schema; `None` for keys the schema does not know.
    pub kind: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub view: FieldView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntryView {
    pub key: String,
    pub raw: String,
    pub value_type: ListValueType,
    pub valid: bool,
}

/// Display state of a composite slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeView {
    /// `None` while the slot is uninitialized.
    pub type_name: Option<String>,
    /// Sub-types offered by the family selector; one entry means no selector.
    pub choices: Vec<String>,
    pub blank: bool,
    pub form: Option<Box<FormFrame>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldView {
    Select {
        options: Vec<Value>,
        selected: Value,
    },
    Number {
        value: Option<f64>,
        min: Option<f64>,
        max: Option<f64>,
        step: Option<f64>,
    },
    Text(String),
    Toggle(bool),
    Color(String),
    Numbers(Vec<f64>),
    Strings(Vec<String>),
    Colors {
        values: Vec<String>,
        max: usize,
    },
    Pair([f64; 2]),
    List(Vec<ListEntryView>),
    Composite(CompositeView),
    /// Unknown key carried through unchanged.
    Passthrough(Value),
}
