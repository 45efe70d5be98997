use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{SparseConfigObject, number_value, parse_finite};
use crate::error::InputRejection;
use crate::interaction::{ListAction, ListValueType};

use super::coercion::parse_bool;

/// One row of a key/value list editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub key: String,
    pub raw: String,
    pub value_type: ListValueType,
    /// Nested (array/object/null) values carried verbatim until the row is edited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preserved: Option<Value>,
}

impl ListEntry {
    fn from_value(key: &str, value: &Value) -> Self {
        let (raw, value_type, preserved) = match value {
            Value::Bool(flag) => (flag.to_string(), ListValueType::Boolean, None),
            Value::Number(number) => (number.to_string(), ListValueType::Number, None),
            Value::String(text) => (text.clone(), ListValueType::String, None),
            other => (other.to_string(), ListValueType::String, Some(other.clone())),
        };
        Self {
            key: key.to_owned(),
            raw,
            value_type,
            preserved,
        }
    }

    /// Typed value of this row.
    pub fn coerce(&self) -> Result<Value, InputRejection> {
        if let Some(preserved) = &self.preserved {
            return Ok(preserved.clone());
        }
        match self.value_type {
            ListValueType::String => Ok(Value::String(self.raw.clone())),
            ListValueType::Number => parse_finite(&self.raw)
                .and_then(number_value)
                .ok_or_else(|| InputRejection::NotANumber {
                    input: self.raw.clone(),
                }),
            ListValueType::Boolean => {
                parse_bool(&self.raw)
                    .map(Value::Bool)
                    .ok_or_else(|| InputRejection::NotABoolean {
                        input: self.raw.clone(),
                    })
            }
        }
    }
}

/// Local edit buffer of a `list` field.
///
/// Rows may hold unparsed text; the buffer keeps it while nothing is emitted
/// upward until every row coerces again.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListBuffer {
    entries: Vec<ListEntry>,
    last_valid: Value,
}

impl ListBuffer {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let entries = value
            .as_object()
            .map(|object| {
                object
                    .iter()
                    .map(|(key, value)| ListEntry::from_value(key, value))
                    .collect()
            })
            .unwrap_or_default();
        let mut buffer = Self {
            entries,
            last_valid: Value::Object(SparseConfigObject::new()),
        };
        if let Ok(value) = buffer.serialize() {
            buffer.last_valid = value;
        }
        buffer
    }

    #[must_use]
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Rebuilds from an external value unless it is what this buffer last produced.
    pub fn sync(&mut self, value: &Value) {
        if *value != self.last_valid {
            *self = Self::from_value(value);
        }
    }

    /// Applies one row edit. The buffer keeps the edit even when it is rejected.
    pub fn apply(&mut self, action: ListAction) -> Result<Value, InputRejection> {
        match action {
            ListAction::AddEntry => self.entries.push(ListEntry {
                key: String::new(),
                raw: String::new(),
                value_type: ListValueType::String,
                preserved: None,
            }),
            ListAction::RemoveEntry(index) => {
                self.entry_mut(index)?;
                self.entries.remove(index);
            }
            ListAction::SetKey { index, key } => self.entry_mut(index)?.key = key,
            ListAction::SetValue { index, raw } => {
                let entry = self.entry_mut(index)?;
                entry.raw = raw;
                entry.preserved = None;
            }
            ListAction::SetValueType { index, value_type } => {
                let entry = self.entry_mut(index)?;
                entry.value_type = value_type;
                entry.preserved = None;
            }
        }
        let value = self.serialize()?;
        self.last_valid = value.clone();
        Ok(value)
    }

    /// Rows with an empty key are skipped; a later duplicate key wins.
    pub fn serialize(&self) -> Result<Value, InputRejection> {
        let mut object = SparseConfigObject::new();
        for entry in &self.entries {
            if entry.key.is_empty() {
                continue;
            }
            object.insert(entry.key.clone(), entry.coerce()?);
        }
        Ok(Value::Object(object))
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut ListEntry, InputRejection> {
        self.entries
            .get_mut(index)
            .ok_or(InputRejection::MissingListEntry { index })
    }
}
