//! Messages flowing into editors.
//!
//! Every widget interaction becomes one of these values. `ParamSetAction::Sync`
//! is the only externally caused action; all others are local edits.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::SparseConfigObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairAxis {
    X,
    Y,
}

impl PairAxis {
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

/// Per-entry value type of a key/value list field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ListValueType {
    #[default]
    String,
    Number,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListAction {
    AddEntry,
    RemoveEntry(usize),
    SetKey {
        index: usize,
        key: String,
    },
    SetValue {
        index: usize,
        raw: String,
    },
    SetValueType {
        index: usize,
        value_type: ListValueType,
    },
}

/// Raw interaction with a single field widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldInput {
    /// Free text typed into a text or numeric input.
    Text(String),
    Toggle(bool),
    /// Option picked in a select widget; widgets always transmit strings.
    Choose(String),
    /// Tokens of a multi-value input.
    Items(Vec<String>),
    PairComponent {
        axis: PairAxis,
        text: String,
    },
    List(ListAction),
    Composite(CompositeAction),
    /// Programmatic replacement, coerced like any other edit.
    Replace(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CompositeAction {
    /// Switch the concrete sub-type; arguments are reset.
    SelectType(String),
    /// Edit the nested parameter set of the current sub-type.
    Arguments(Box<ParamSetAction>),
}

impl CompositeAction {
    #[must_use]
    pub fn arguments(action: ParamSetAction) -> Self {
        Self::Arguments(Box::new(action))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamSetAction {
    /// The externally owned value changed.
    Sync(SparseConfigObject),
    /// Add the first schema field that is not yet active.
    AddField,
    AddNamed(String),
    RemoveField(String),
    /// Retarget an active slot to another schema field; its value resets.
    RenameField {
        from: String,
        to: String,
    },
    EditField {
        name: String,
        input: FieldInput,
    },
}

impl ParamSetAction {
    #[must_use]
    pub fn edit(name: impl Into<String>, input: FieldInput) -> Self {
        Self::EditField {
            name: name.into(),
            input,
        }
    }

    /// Shorthand for editing a composite field's nested arguments.
    #[must_use]
    pub fn edit_nested(name: impl Into<String>, action: ParamSetAction) -> Self {
        Self::edit(
            name,
            FieldInput::Composite(CompositeAction::arguments(action)),
        )
    }

    #[must_use]
    pub fn select_type(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::edit(
            name,
            FieldInput::Composite(CompositeAction::SelectType(type_name.into())),
        )
    }

    #[must_use]
    pub const fn is_local(&self) -> bool {
        !matches!(self, Self::Sync(_))
    }
}
