//! Type-directed editing of a single field.
//!
//! `apply_input` turns one widget interaction into at most one new value.
//! Stateful kinds (`list`, composites) are driven through their own buffers
//! by the owning `ActiveField`.

pub mod coercion;
pub mod defaults;
pub mod list;

use serde_json::Value;

use crate::core::{FieldDescriptor, FieldKind, parse_finite, value_as_f64};
use crate::editor::EditorConfig;
use crate::error::InputRejection;
use crate::interaction::FieldInput;

pub use coercion::{
    coerce_number, coerce_select, numbers_from_value, pair_from_value, parse_bool, split_tokens,
    strings_from_value,
};
pub use defaults::{default_value, required_defaults};
pub(crate) use defaults::required_defaults_within;
pub use list::{ListBuffer, ListEntry};

/// Coerces one interaction with a plain (non-composite, non-list) field.
pub fn apply_input(
    descriptor: &FieldDescriptor,
    current: &Value,
    input: &FieldInput,
    config: &EditorConfig,
) -> Result<Value, InputRejection> {
    let unsupported = || InputRejection::UnsupportedInput {
        kind: descriptor.kind.name().into_owned(),
    };
    match (&descriptor.kind, input) {
        (FieldKind::Number, FieldInput::Text(text)) => coerce_number(descriptor, text, config),
        (FieldKind::Number, FieldInput::Replace(value)) => value_as_f64(value)
            .map(|number| coercion::bounded_number(descriptor, number, config))
            .ok_or_else(|| InputRejection::NotANumber {
                input: value.to_string(),
            }),

        (FieldKind::Select, FieldInput::Choose(choice) | FieldInput::Text(choice)) => {
            coerce_select(descriptor, choice)
        }
        (FieldKind::Select, FieldInput::Replace(value)) => match value {
            Value::String(choice) => coerce_select(descriptor, choice),
            other => coerce_select(descriptor, &other.to_string()),
        },

        (FieldKind::String, FieldInput::Text(text)) => Ok(Value::String(text.clone())),
        (FieldKind::String, FieldInput::Replace(Value::String(text))) => {
            Ok(Value::String(text.clone()))
        }

        (FieldKind::Boolean, FieldInput::Toggle(flag)) => Ok(Value::Bool(*flag)),
        (FieldKind::Boolean, FieldInput::Text(text) | FieldInput::Choose(text)) => parse_bool(text)
            .map(Value::Bool)
            .ok_or_else(|| InputRejection::NotABoolean {
                input: text.clone(),
            }),
        (FieldKind::Boolean, FieldInput::Replace(Value::Bool(flag))) => Ok(Value::Bool(*flag)),

        (FieldKind::Color, FieldInput::Text(text) | FieldInput::Choose(text)) => color(text),
        (FieldKind::Color, FieldInput::Replace(Value::String(text))) => color(text),

        (FieldKind::Numbers, FieldInput::Items(items)) => Ok(coercion::numbers_to_value(
            &items
                .iter()
                .filter_map(|item| parse_finite(item))
                .collect::<Vec<_>>(),
        )),
        (FieldKind::Numbers, FieldInput::Text(_) | FieldInput::Replace(_)) => {
            let source = text_or_value(input);
            Ok(coercion::numbers_to_value(&numbers_from_value(&source)))
        }

        (FieldKind::Strings | FieldKind::Colors, FieldInput::Items(items)) => Ok(strings(
            descriptor,
            items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect(),
            config,
        )),
        (FieldKind::Strings | FieldKind::Colors, FieldInput::Text(text)) => Ok(strings(
            descriptor,
            split_tokens(text).map(str::to_owned).collect(),
            config,
        )),
        (FieldKind::Strings | FieldKind::Colors, FieldInput::Replace(value)) => Ok(strings(
            descriptor,
            strings_from_value(value),
            config,
        )),

        (FieldKind::Pair, FieldInput::PairComponent { axis, text }) => {
            let component = parse_finite(text).ok_or_else(|| InputRejection::NotANumber {
                input: text.clone(),
            })?;
            let mut pair = pair_from_value(current).unwrap_or([0.0, 0.0]);
            pair[axis.index()] = component;
            Ok(coercion::numbers_to_value(&pair))
        }
        (FieldKind::Pair, FieldInput::Text(_) | FieldInput::Replace(_)) => {
            let source = text_or_value(input);
            let numbers = numbers_from_value(&source);
            let pair = match numbers.as_slice() {
                [x, y] => [*x, *y],
                _ => pair_from_value(&source).ok_or_else(|| InputRejection::NotANumber {
                    input: source.to_string(),
                })?,
            };
            Ok(coercion::numbers_to_value(&pair))
        }

        _ => Err(unsupported()),
    }
}

/// Canonical serialized form of a stored value.
///
/// Vector kinds wrap bare scalars into arrays, pairs drop the legacy `{x, y}`
/// form, colors are bounded. Values that cannot be read are returned as-is.
#[must_use]
pub fn normalize(descriptor: &FieldDescriptor, value: &Value, config: &EditorConfig) -> Value {
    match &descriptor.kind {
        FieldKind::Numbers => coercion::numbers_to_value(&numbers_from_value(value)),
        FieldKind::Strings => coercion::strings_to_value(&strings_from_value(value)),
        FieldKind::Colors => {
            let mut colors = strings_from_value(value);
            colors.truncate(config.max_colors);
            coercion::strings_to_value(&colors)
        }
        FieldKind::Pair => pair_from_value(value)
            .map(|pair| coercion::numbers_to_value(&pair))
            .unwrap_or_else(|| value.clone()),
        _ => value.clone(),
    }
}

fn color(text: &str) -> Result<Value, InputRejection> {
    let text = text.trim();
    if text.is_empty() {
        return Err(InputRejection::EmptyValue);
    }
    Ok(Value::String(text.to_owned()))
}

fn strings(descriptor: &FieldDescriptor, mut items: Vec<String>, config: &EditorConfig) -> Value {
    if descriptor.kind == FieldKind::Colors {
        items.truncate(config.max_colors);
    }
    coercion::strings_to_value(&items)
}

fn text_or_value(input: &FieldInput) -> Value {
    match input {
        FieldInput::Text(text) => Value::String(text.clone()),
        FieldInput::Replace(value) => value.clone(),
        _ => Value::Null,
    }
}
