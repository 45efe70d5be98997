use serde_json::Value;

use crate::core::{FieldDescriptor, number_value, parse_finite, value_as_f64};
use crate::editor::EditorConfig;
use crate::error::InputRejection;

/// Parses numeric text for a `number` field: floors unit steps and clamps to bounds.
pub fn coerce_number(
    descriptor: &FieldDescriptor,
    text: &str,
    config: &EditorConfig,
) -> Result<Value, InputRejection> {
    let parsed = parse_finite(text).ok_or_else(|| InputRejection::NotANumber {
        input: text.to_owned(),
    })?;
    Ok(bounded_number(descriptor, parsed, config))
}

pub(crate) fn bounded_number(descriptor: &FieldDescriptor, value: f64, config: &EditorConfig) -> Value {
    let mut value = value;
    if config.floor_unit_steps && descriptor.is_unit_step() {
        value = value.floor();
    }
    if config.clamp_numbers {
        if let Some(min) = descriptor.min {
            value = value.max(min);
        }
        if let Some(max) = descriptor.max {
            value = value.min(max);
        }
    }
    // Bounds are finite by construction, so this never falls back.
    number_value(value).unwrap_or(Value::Null)
}

/// Matches a widget string against the select options.
///
/// Numeric option sets coerce the choice to a number first.
pub fn coerce_select(descriptor: &FieldDescriptor, choice: &str) -> Result<Value, InputRejection> {
    if descriptor.options.is_empty() {
        return Ok(Value::String(choice.to_owned()));
    }
    if descriptor.has_numeric_options() {
        let parsed = parse_finite(choice).ok_or_else(|| InputRejection::NotANumber {
            input: choice.to_owned(),
        })?;
        return descriptor
            .options
            .iter()
            .find(|option| option.as_f64() == Some(parsed))
            .cloned()
            .ok_or_else(|| InputRejection::NotAnOption {
                input: choice.to_owned(),
            });
    }
    descriptor
        .options
        .iter()
        .find(|option| option.as_str() == Some(choice))
        .cloned()
        .ok_or_else(|| InputRejection::NotAnOption {
            input: choice.to_owned(),
        })
}

/// `"true"`/`"1"` are true; `"false"`/`"0"`/`""` are false.
#[must_use]
pub fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" | "" => Some(false),
        _ => None,
    }
}

/// Splits comma-separated text into trimmed, non-empty tokens.
pub fn split_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(',').map(str::trim).filter(|token| !token.is_empty())
}

/// Numbers of a scalar or array value; entries that do not parse are dropped.
#[must_use]
pub fn numbers_from_value(value: &Value) -> Vec<f64> {
    match value {
        Value::Array(items) => items.iter().filter_map(value_as_f64).collect(),
        Value::String(text) => split_tokens(text).filter_map(parse_finite).collect(),
        other => value_as_f64(other).into_iter().collect(),
    }
}

/// Strings of a scalar or array value; numbers are rendered as text.
#[must_use]
pub fn strings_from_value(value: &Value) -> Vec<String> {
    fn as_text(value: &Value) -> Option<String> {
        match value {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(flag) => Some(flag.to_string()),
            _ => None,
        }
    }
    match value {
        Value::Array(items) => items.iter().filter_map(as_text).collect(),
        other => as_text(other).into_iter().collect(),
    }
}

/// Reads `[x, y]` or the legacy `{x, y}` object form.
#[must_use]
pub fn pair_from_value(value: &Value) -> Option<[f64; 2]> {
    match value {
        Value::Array(items) if items.len() == 2 => {
            Some([value_as_f64(&items[0])?, value_as_f64(&items[1])?])
        }
        Value::Object(object) => Some([
            value_as_f64(object.get("x")?)?,
            value_as_f64(object.get("y")?)?,
        ]),
        _ => None,
    }
}

#[must_use]
pub fn numbers_to_value(numbers: &[f64]) -> Value {
    Value::Array(numbers.iter().copied().filter_map(number_value).collect())
}

#[must_use]
pub fn strings_to_value(strings: &[String]) -> Value {
    Value::Array(strings.iter().cloned().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::core::FieldKind;

    #[test]
    fn unit_step_floors_and_bounds_clamp() {
        let config = EditorConfig::default();
        let descriptor = FieldDescriptor::new("nrow", FieldKind::Number)
            .with_min(1.0)
            .with_step(1.0);
        assert_eq!(coerce_number(&descriptor, "3.9", &config), Ok(json!(3)));
        assert_eq!(coerce_number(&descriptor, "-4", &config), Ok(json!(1)));
        assert!(matches!(
            coerce_number(&descriptor, "3x", &config),
            Err(InputRejection::NotANumber { .. })
        ));
    }

    #[test]
    fn numeric_select_options_coerce_choice() {
        let descriptor = FieldDescriptor::new("direction", FieldKind::Select)
            .with_options([json!(1), json!(-1)]);
        assert_eq!(coerce_select(&descriptor, "-1"), Ok(json!(-1)));
        assert!(coerce_select(&descriptor, "2").is_err());
        assert!(coerce_select(&descriptor, "up").is_err());
    }

    #[test]
    fn boolean_strings_follow_tri_state_rules() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool(""), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn pair_accepts_legacy_object() {
        assert_eq!(pair_from_value(&json!({"x": 2, "y": 3})), Some([2.0, 3.0]));
        assert_eq!(pair_from_value(&json!([2, "3"])), Some([2.0, 3.0]));
        assert_eq!(pair_from_value(&json!([1, 2, 3])), None);
    }

    #[test]
    fn number_lists_drop_unparseable_entries() {
        assert_eq!(numbers_from_value(&json!([1, "x", "2.5", null])), vec![1.0, 2.5]);
        assert_eq!(numbers_from_value(&json!(5)), vec![5.0]);
        assert_eq!(numbers_from_value(&json!("1, b, 3")), vec![1.0, 3.0]);
    }
}
