use serde_json::{Value, json};

use crate::composite;
use crate::core::{FieldDescriptor, FieldKind, SparseConfigObject};
use crate::editor::EditorContext;

use super::coercion::bounded_number;

/// Value a freshly added or retargeted field starts with.
///
/// An authored `default` wins; otherwise the kind decides: `false`, `0`, `""`,
/// `[]`, `{}`, the first option, or a `{type, arguments}` skeleton.
#[must_use]
pub fn default_value(descriptor: &FieldDescriptor, context: &EditorContext) -> Value {
    default_value_within(descriptor, context, &mut Vec::new())
}

/// Required fields of a descriptor list at their defaults; everything else stays unset.
#[must_use]
pub fn required_defaults(
    descriptors: &[FieldDescriptor],
    context: &EditorContext,
) -> SparseConfigObject {
    required_defaults_within(descriptors, context, &mut Vec::new())
}

/// `expanding` holds the composite types whose defaults are being built above this call.
pub(crate) fn default_value_within(
    descriptor: &FieldDescriptor,
    context: &EditorContext,
    expanding: &mut Vec<String>,
) -> Value {
    if let Some(default) = &descriptor.default {
        return default.clone();
    }
    match &descriptor.kind {
        FieldKind::Boolean => Value::Bool(false),
        FieldKind::Number => bounded_number(descriptor, 0.0, &context.config),
        FieldKind::String => Value::String(String::new()),
        FieldKind::Select => descriptor
            .options
            .first()
            .cloned()
            .unwrap_or_else(|| Value::String(String::new())),
        FieldKind::Numbers | FieldKind::Strings | FieldKind::Colors => Value::Array(Vec::new()),
        FieldKind::List => Value::Object(SparseConfigObject::new()),
        FieldKind::Color => Value::String("#000000".to_owned()),
        FieldKind::Pair => json!([0, 0]),
        kind => composite::skeleton_within(kind, context, expanding),
    }
}

pub(crate) fn required_defaults_within(
    descriptors: &[FieldDescriptor],
    context: &EditorContext,
    expanding: &mut Vec<String>,
) -> SparseConfigObject {
    descriptors
        .iter()
        .filter(|descriptor| descriptor.required)
        .map(|descriptor| {
            let value = default_value_within(descriptor, context, expanding);
            (descriptor.name.clone(), value)
        })
        .collect()
}
