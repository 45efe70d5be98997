//! Dispatch of composite kinds to nested parameter-set editors.
//!
//! A composite slot holds `{type, arguments}`. The slot's kind decides which
//! sub-types may be chosen; the chosen sub-type's descriptor table drives a
//! nested `ParamSetEditor` over `arguments`. Nested fields may be composites
//! again, which is how trees of arbitrary depth are edited.

pub mod fixed_shape;

use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{
    CompositeFamily, CompositeValue, ELEMENT_BLANK, FieldDescriptor, FieldKind,
    SparseConfigObject, VariantSlot,
};
use crate::editor::{EditOutcome, EditorContext, ParamSetEditor};
use crate::error::InputRejection;
use crate::field;
use crate::interaction::{CompositeAction, ParamSetAction};
use crate::render::{CompositeView, FormFrame};
use crate::schema::SchemaCatalog;

/// Lifecycle of one composite slot.
#[derive(Debug, Clone)]
pub enum CompositeState {
    Uninitialized,
    Populated {
        type_name: String,
        arguments: ParamSetEditor,
    },
    /// `element_blank`: the element is switched off and has nothing to edit.
    Blank { type_name: String },
}

#[derive(Debug, Clone)]
pub struct CompositeEditor {
    choices: Vec<String>,
    state: CompositeState,
    context: EditorContext,
}

impl CompositeEditor {
    #[must_use]
    pub fn for_kind(kind: &FieldKind, context: EditorContext) -> Self {
        let choices = choices_for_kind(kind, &context.catalog);
        Self::for_types(choices, context)
    }

    /// Editor over an explicit set of sub-types.
    #[must_use]
    pub fn for_types(choices: Vec<String>, context: EditorContext) -> Self {
        Self {
            choices,
            state: CompositeState::Uninitialized,
            context,
        }
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn state(&self) -> &CompositeState {
        &self.state
    }

    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        match &self.state {
            CompositeState::Uninitialized => None,
            CompositeState::Populated { type_name, .. } | CompositeState::Blank { type_name } => {
                Some(type_name.as_str())
            }
        }
    }

    #[must_use]
    pub fn arguments(&self) -> Option<&ParamSetEditor> {
        match &self.state {
            CompositeState::Populated { arguments, .. } => Some(arguments),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self.state, CompositeState::Blank { .. })
    }

    /// Follows an externally supplied value.
    pub fn sync(&mut self, value: &Value) {
        let Some(parsed) = CompositeValue::from_value(value) else {
            self.state = CompositeState::Uninitialized;
            return;
        };
        if !self.choices.contains(&parsed.type_name) {
            debug!(type_name = %parsed.type_name, "composite type outside the slot's choices");
        }
        if parsed.is_blank() {
            self.state = CompositeState::Blank {
                type_name: parsed.type_name,
            };
            return;
        }
        let incoming = parsed.arguments_or_empty();
        if let CompositeState::Populated {
            type_name,
            arguments,
        } = &mut self.state
        {
            if *type_name == parsed.type_name {
                arguments.dispatch(ParamSetAction::Sync(incoming));
                return;
            }
        }
        self.state = self.populated(parsed.type_name, &incoming);
    }

    /// Applies one interaction; `Ok(None)` means nothing changed.
    pub fn apply(&mut self, action: CompositeAction) -> Result<Option<Value>, InputRejection> {
        match action {
            CompositeAction::SelectType(type_name) => self.select_type(type_name),
            CompositeAction::Arguments(action) => self.edit_arguments(*action),
        }
    }

    /// Serialized `{type, arguments}`; `null` while uninitialized.
    #[must_use]
    pub fn value(&self) -> Value {
        match &self.state {
            CompositeState::Uninitialized => Value::Null,
            CompositeState::Blank { type_name } => CompositeValue::new(type_name.clone()).to_value(),
            CompositeState::Populated {
                type_name,
                arguments,
            } => CompositeValue::new(type_name.clone())
                .with_arguments(arguments.serialize())
                .to_value(),
        }
    }

    #[must_use]
    pub fn composite_value(&self) -> Option<CompositeValue> {
        CompositeValue::from_value(&self.value())
    }

    #[must_use]
    pub fn view(&self) -> CompositeView {
        CompositeView {
            type_name: self.type_name().map(str::to_owned),
            choices: self.choices.clone(),
            blank: self.is_blank(),
            form: self.frame().map(Box::new),
        }
    }

    /// Form of the nested arguments, if the slot is populated.
    #[must_use]
    pub fn frame(&self) -> Option<FormFrame> {
        self.arguments().map(ParamSetEditor::frame)
    }

    fn select_type(&mut self, type_name: String) -> Result<Option<Value>, InputRejection> {
        if !self.choices.contains(&type_name) {
            return Err(InputRejection::InvalidType { type_name });
        }
        if self.type_name() == Some(type_name.as_str()) {
            return Ok(None);
        }
        debug!(from = ?self.type_name(), to = %type_name, "switch composite type");
        self.state = self.fresh_state(type_name);
        Ok(Some(self.value()))
    }

    fn edit_arguments(&mut self, action: ParamSetAction) -> Result<Option<Value>, InputRejection> {
        let initialized = matches!(self.state, CompositeState::Uninitialized);
        if initialized {
            let Some(type_name) = initial_type(&self.choices).map(str::to_owned) else {
                return Err(InputRejection::UnsupportedInput {
                    kind: "composite".to_owned(),
                });
            };
            debug!(type_name = %type_name, "initializing composite before its first edit");
            self.state = self.fresh_state(type_name);
        }
        let outcome = match &mut self.state {
            CompositeState::Populated { arguments, .. } => arguments.dispatch(action),
            CompositeState::Blank { type_name } => {
                return Err(InputRejection::UnsupportedInput {
                    kind: type_name.clone(),
                });
            }
            CompositeState::Uninitialized => return Ok(None),
        };
        match outcome {
            EditOutcome::Emitted(_) => Ok(Some(self.value())),
            EditOutcome::Unchanged | EditOutcome::Rejected(_) if initialized => {
                Ok(Some(self.value()))
            }
            EditOutcome::Unchanged => Ok(None),
            EditOutcome::Rejected(reason) => Err(reason),
        }
    }

    fn fresh_state(&self, type_name: String) -> CompositeState {
        if type_name == ELEMENT_BLANK {
            return CompositeState::Blank { type_name };
        }
        let arguments = default_arguments(&type_name, &self.context);
        self.populated(type_name, &arguments)
    }

    fn populated(&self, type_name: String, arguments: &SparseConfigObject) -> CompositeState {
        let descriptors = descriptors_for_type(&type_name, &self.context.catalog);
        CompositeState::Populated {
            arguments: ParamSetEditor::with_context(descriptors, arguments, self.context.clone())
                .nested(true),
            type_name,
        }
    }
}

/// Sub-types a composite kind offers.
///
/// Generic family slots list every registered variant. A fixed `element_*`
/// slot lists its own variant first, then every other registered element
/// and `element_blank`.
#[must_use]
pub fn choices_for_kind(kind: &FieldKind, catalog: &SchemaCatalog) -> Vec<String> {
    match kind {
        FieldKind::Family {
            family,
            slot: VariantSlot::Any,
        } => catalog.types_with_prefix(family.prefix()),
        FieldKind::Family {
            family: CompositeFamily::Element,
            slot: VariantSlot::Fixed(type_name),
        } if type_name != ELEMENT_BLANK => element_choices(type_name, catalog),
        FieldKind::Family {
            slot: VariantSlot::Fixed(type_name),
            ..
        } => vec![type_name.clone()],
        other => other
            .fixed_type_name()
            .map(|type_name| vec![type_name.to_owned()])
            .unwrap_or_default(),
    }
}

fn element_choices(preferred: &str, catalog: &SchemaCatalog) -> Vec<String> {
    let mut choices = vec![preferred.to_owned()];
    choices.extend(
        catalog
            .types_with_prefix(CompositeFamily::Element.prefix())
            .into_iter()
            .filter(|type_name| type_name != preferred),
    );
    if !choices.iter().any(|type_name| type_name == ELEMENT_BLANK) {
        choices.push(ELEMENT_BLANK.to_owned());
    }
    choices
}

/// Descriptor table of a concrete sub-type.
#[must_use]
pub fn descriptors_for_type(type_name: &str, catalog: &SchemaCatalog) -> Vec<FieldDescriptor> {
    fixed_shape::fields(type_name)
        .unwrap_or_else(|| catalog.field_descriptors(type_name).to_vec())
}

/// Arguments a freshly chosen sub-type starts with: its required fields only.
#[must_use]
pub fn default_arguments(type_name: &str, context: &EditorContext) -> SparseConfigObject {
    default_arguments_within(type_name, context, &mut Vec::new())
}

/// Default `{type, arguments}` for a newly added composite field.
#[must_use]
pub fn skeleton(kind: &FieldKind, context: &EditorContext) -> Value {
    skeleton_within(kind, context, &mut Vec::new())
}

/// A type that requires itself, directly or through other types, stops
/// expanding at `{type, arguments: {}}`.
fn default_arguments_within(
    type_name: &str,
    context: &EditorContext,
    expanding: &mut Vec<String>,
) -> SparseConfigObject {
    if expanding.iter().any(|outer| outer == type_name) {
        warn!(type_name, "required composite fields form a cycle; leaving arguments empty");
        return SparseConfigObject::new();
    }
    expanding.push(type_name.to_owned());
    let arguments = field::required_defaults_within(
        &descriptors_for_type(type_name, &context.catalog),
        context,
        expanding,
    );
    expanding.pop();
    arguments
}

pub(crate) fn skeleton_within(
    kind: &FieldKind,
    context: &EditorContext,
    expanding: &mut Vec<String>,
) -> Value {
    let choices = choices_for_kind(kind, &context.catalog);
    match initial_type(&choices) {
        Some(type_name) => CompositeValue::new(type_name)
            .with_arguments(default_arguments_within(type_name, context, expanding))
            .to_value(),
        None => Value::Null,
    }
}

fn initial_type(choices: &[String]) -> Option<&str> {
    choices
        .iter()
        .find(|choice| *choice != ELEMENT_BLANK)
        .or_else(|| choices.first())
        .map(String::as_str)
}
