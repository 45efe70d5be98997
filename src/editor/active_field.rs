use serde_json::Value;

use crate::composite::CompositeEditor;
use crate::core::{FieldDescriptor, FieldKind, value_as_f64};
use crate::error::InputRejection;
use crate::field::{self, ListBuffer};
use crate::interaction::FieldInput;
use crate::render::{FieldView, ListEntryView};

use super::EditorContext;

/// A schema field paired with its live value, owned by one parameter-set editor.
#[derive(Debug, Clone)]
pub struct ActiveField {
    name: String,
    value: Value,
    widget: FieldWidget,
}

#[derive(Debug, Clone)]
enum FieldWidget {
    Plain,
    List(ListBuffer),
    Composite(Box<CompositeEditor>),
}

impl ActiveField {
    pub(crate) fn new(
        name: String,
        descriptor: Option<&FieldDescriptor>,
        value: Value,
        context: &EditorContext,
    ) -> Self {
        let widget = match descriptor.map(|descriptor| &descriptor.kind) {
            Some(FieldKind::List) => FieldWidget::List(ListBuffer::from_value(&value)),
            Some(kind) if kind.is_composite() => {
                let mut editor = CompositeEditor::for_kind(kind, context.clone());
                editor.sync(&value);
                FieldWidget::Composite(Box::new(editor))
            }
            _ => FieldWidget::Plain,
        };
        Self {
            name,
            value,
            widget,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Nested editor of a composite field.
    #[must_use]
    pub fn composite(&self) -> Option<&CompositeEditor> {
        match &self.widget {
            FieldWidget::Composite(editor) => Some(editor),
            _ => None,
        }
    }

    pub(crate) fn sync(&mut self, value: Value) {
        if value == self.value {
            return;
        }
        match &mut self.widget {
            FieldWidget::List(buffer) => buffer.sync(&value),
            FieldWidget::Composite(editor) => editor.sync(&value),
            FieldWidget::Plain => {}
        }
        self.value = value;
    }

    /// Applies one interaction. `Ok(None)` means the field did not change.
    pub(crate) fn edit(
        &mut self,
        descriptor: &FieldDescriptor,
        input: FieldInput,
        context: &EditorContext,
    ) -> Result<Option<Value>, InputRejection> {
        let next = match (&mut self.widget, input) {
            (FieldWidget::List(buffer), FieldInput::List(action)) => buffer.apply(action)?,
            (FieldWidget::List(buffer), FieldInput::Replace(value)) if value.is_object() => {
                *buffer = ListBuffer::from_value(&value);
                value
            }
            (FieldWidget::Composite(editor), FieldInput::Composite(action)) => {
                match editor.apply(action)? {
                    Some(value) => value,
                    None => return Ok(None),
                }
            }
            (FieldWidget::Composite(editor), FieldInput::Replace(value)) => {
                editor.sync(&value);
                editor.value()
            }
            (FieldWidget::Plain, input) => {
                field::apply_input(descriptor, &self.value, &input, &context.config)?
            }
            _ => {
                return Err(InputRejection::UnsupportedInput {
                    kind: descriptor.kind.name().into_owned(),
                });
            }
        };
        self.value = next.clone();
        Ok(Some(next))
    }

    pub(crate) fn view(
        &self,
        descriptor: Option<&FieldDescriptor>,
        context: &EditorContext,
    ) -> FieldView {
        let Some(descriptor) = descriptor else {
            return FieldView::Passthrough(self.value.clone());
        };
        match &self.widget {
            FieldWidget::List(buffer) => FieldView::List(
                buffer
                    .entries()
                    .iter()
                    .map(|entry| ListEntryView {
                        key: entry.key.clone(),
                        raw: entry.raw.clone(),
                        value_type: entry.value_type,
                        valid: entry.coerce().is_ok(),
                    })
                    .collect(),
            ),
            FieldWidget::Composite(editor) => FieldView::Composite(editor.view()),
            FieldWidget::Plain => plain_view(descriptor, &self.value, context),
        }
    }
}

fn plain_view(descriptor: &FieldDescriptor, value: &Value, context: &EditorContext) -> FieldView {
    let text = || match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    };
    match &descriptor.kind {
        FieldKind::Select => FieldView::Select {
            options: descriptor.options.clone(),
            selected: value.clone(),
        },
        FieldKind::Number => FieldView::Number {
            value: value_as_f64(value),
            min: descriptor.min,
            max: descriptor.max,
            step: descriptor.step,
        },
        FieldKind::Boolean => FieldView::Toggle(match value {
            Value::Bool(flag) => *flag,
            Value::String(text) => field::parse_bool(text).unwrap_or(false),
            _ => false,
        }),
        FieldKind::Color => FieldView::Color(text()),
        FieldKind::Numbers => FieldView::Numbers(field::numbers_from_value(value)),
        FieldKind::Strings => FieldView::Strings(field::strings_from_value(value)),
        FieldKind::Colors => {
            let mut values = field::strings_from_value(value);
            values.truncate(context.config.max_colors);
            FieldView::Colors {
                values,
                max: context.config.max_colors,
            }
        }
        FieldKind::Pair => FieldView::Pair(field::pair_from_value(value).unwrap_or([0.0, 0.0])),
        _ => FieldView::Text(text()),
    }
}
