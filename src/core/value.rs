use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use super::descriptor::ELEMENT_BLANK;

/// Mapping of explicitly set field names to values. Absence means "not set".
pub type SparseConfigObject = serde_json::Map<String, Value>;

/// Largest magnitude at which an `f64` still represents every integer exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Recursive `{type, arguments}` node of a plot configuration tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeValue {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<SparseConfigObject>,
}

impl CompositeValue {
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            arguments: Some(SparseConfigObject::new()),
        }
    }

    #[must_use]
    pub fn blank() -> Self {
        Self::new(ELEMENT_BLANK)
    }

    #[must_use]
    pub fn with_arguments(mut self, arguments: SparseConfigObject) -> Self {
        self.arguments = Some(arguments);
        self
    }

    #[must_use]
    pub fn with_argument(mut self, name: impl Into<String>, value: Value) -> Self {
        self.arguments
            .get_or_insert_with(SparseConfigObject::new)
            .insert(name.into(), value);
        self
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.type_name == ELEMENT_BLANK
    }

    /// Arguments, treating a missing object as empty.
    #[must_use]
    pub fn arguments_or_empty(&self) -> SparseConfigObject {
        self.arguments.clone().unwrap_or_default()
    }

    /// Lenient reader: accepts `{type, arguments?}` objects and bare type-name strings.
    ///
    /// Non-object `arguments` are treated as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(type_name) if !type_name.is_empty() => Some(Self::new(type_name.clone())),
            Value::Object(object) => {
                let type_name = object.get("type")?.as_str()?.to_owned();
                let arguments = object.get("arguments").and_then(Value::as_object).cloned();
                Some(Self {
                    type_name,
                    arguments,
                })
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut object = SparseConfigObject::new();
        object.insert("type".to_owned(), Value::String(self.type_name.clone()));
        if let Some(arguments) = &self.arguments {
            object.insert("arguments".to_owned(), Value::Object(arguments.clone()));
        }
        Value::Object(object)
    }
}

impl From<CompositeValue> for Value {
    fn from(value: CompositeValue) -> Self {
        value.to_value()
    }
}

/// Converts a finite float into a JSON number, preferring an integer encoding.
#[must_use]
pub fn number_value(value: f64) -> Option<Value> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Some(Value::Number(Number::from(value as i64)));
    }
    Number::from_f64(value).map(Value::Number)
}

/// Reads a finite number from a JSON number or a numeric string.
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|v| v.is_finite()),
        Value::String(text) => parse_finite(text),
        _ => None,
    }
}

/// Parses trimmed text into a finite float.
#[must_use]
pub fn parse_finite(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}
