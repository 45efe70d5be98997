use serde_json::Value;
use tracing::{debug, trace};

use crate::core::{FieldDescriptor, SparseConfigObject, find_descriptor};
use crate::error::InputRejection;
use crate::field;
use crate::interaction::{FieldInput, ParamSetAction};
use crate::render::{FieldRow, FormFrame};

use super::{ActiveField, EditorConfig, EditorContext};

/// Result of dispatching one action.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOutcome {
    /// The rebuilt sparse object, to be handed to the owner exactly once.
    Emitted(SparseConfigObject),
    Unchanged,
    /// The edit was ignored; the previous value stays in place.
    Rejected(InputRejection),
}

impl EditOutcome {
    #[must_use]
    pub fn emitted(&self) -> Option<&SparseConfigObject> {
        match self {
            Self::Emitted(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn into_emitted(self) -> Option<SparseConfigObject> {
        match self {
            Self::Emitted(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_emitted(&self) -> bool {
        matches!(self, Self::Emitted(_))
    }
}

/// Editor for the active fields of one node.
///
/// Only keys present in the incoming value become active; the rest of the
/// schema stays hidden until added. Every local mutation rebuilds the sparse
/// object from the active fields alone, so removed keys never linger.
#[derive(Debug, Clone)]
pub struct ParamSetEditor {
    descriptors: Vec<FieldDescriptor>,
    fields: Vec<ActiveField>,
    /// Last emitted object; the next `Sync` carrying it is our own echo.
    pending_echo: Option<SparseConfigObject>,
    context: EditorContext,
    nested: bool,
}

impl ParamSetEditor {
    #[must_use]
    pub fn new(descriptors: Vec<FieldDescriptor>, value: &SparseConfigObject) -> Self {
        Self::with_context(descriptors, value, EditorContext::builtin())
    }

    #[must_use]
    pub fn with_context(
        descriptors: Vec<FieldDescriptor>,
        value: &SparseConfigObject,
        context: EditorContext,
    ) -> Self {
        let mut editor = Self {
            descriptors,
            fields: Vec::with_capacity(value.len()),
            pending_echo: None,
            context,
            nested: false,
        };
        for (name, value) in value {
            editor.track(name.clone(), value.clone());
        }
        editor
    }

    #[must_use]
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    #[must_use]
    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    #[must_use]
    pub fn active_fields(&self) -> &[ActiveField] {
        &self.fields
    }

    #[must_use]
    pub fn active_names(&self) -> Vec<&str> {
        self.fields.iter().map(ActiveField::name).collect()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&ActiveField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Schema fields not yet active, in schema order.
    pub fn addable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.descriptors
            .iter()
            .filter(|descriptor| self.field(&descriptor.name).is_none())
    }

    #[must_use]
    pub fn is_disabled(&self, descriptor: &FieldDescriptor) -> bool {
        descriptor.disabled_when.as_ref().is_some_and(|condition| {
            self.field(&condition.field)
                .is_some_and(|sibling| *sibling.value() == condition.equals)
        })
    }

    /// Whether the next `Sync` is checked against the last emitted object.
    #[must_use]
    pub fn awaiting_echo(&self) -> bool {
        self.pending_echo.is_some()
    }

    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.context.config
    }

    /// Current sparse object, built from the active fields only.
    #[must_use]
    pub fn serialize(&self) -> SparseConfigObject {
        serialize_fields(&self.descriptors, &self.fields, &self.context.config)
    }

    pub fn dispatch(&mut self, action: ParamSetAction) -> EditOutcome {
        let outcome = match action {
            ParamSetAction::Sync(value) => self.reconcile(value),
            ParamSetAction::AddField => self.add_first_available(),
            ParamSetAction::AddNamed(name) => self.add_named(name),
            ParamSetAction::RemoveField(name) => self.remove_field(&name),
            ParamSetAction::RenameField { from, to } => self.rename_field(&from, to),
            ParamSetAction::EditField { name, input } => self.edit_field(&name, input),
        };
        if let EditOutcome::Rejected(reason) = &outcome {
            debug!(reason = %reason, "parameter edit rejected");
        }
        outcome
    }

    #[must_use]
    pub fn frame(&self) -> FormFrame {
        let rows = self
            .fields
            .iter()
            .map(|field| {
                let descriptor = find_descriptor(&self.descriptors, field.name());
                FieldRow {
                    name: field.name().to_owned(),
                    kind: descriptor.map(|descriptor| descriptor.kind.name().into_owned()),
                    required: descriptor.is_some_and(|descriptor| descriptor.required),
                    disabled: descriptor.is_some_and(|descriptor| self.is_disabled(descriptor)),
                    view: field.view(descriptor, &self.context),
                }
            })
            .collect();
        FormFrame {
            nested: self.nested,
            rows,
            addable: self
                .addable()
                .map(|descriptor| descriptor.name.clone())
                .collect(),
        }
    }

    fn reconcile(&mut self, incoming: SparseConfigObject) -> EditOutcome {
        if self.pending_echo.take().is_some_and(|echo| echo == incoming) {
            trace!("ignoring echo of emitted parameter set");
            return EditOutcome::Unchanged;
        }
        self.fields.retain(|field| incoming.contains_key(field.name()));
        for (name, value) in incoming {
            if let Some(field) = self.fields.iter_mut().find(|field| field.name() == name) {
                field.sync(value);
            } else {
                self.track(name, value);
            }
        }
        EditOutcome::Unchanged
    }

    fn track(&mut self, name: String, value: Value) {
        let descriptor = find_descriptor(&self.descriptors, &name);
        let value = match descriptor {
            Some(descriptor) if value.is_null() => field::default_value(descriptor, &self.context),
            Some(_) => value,
            None => {
                debug!(field = %name, "passing through key unknown to the schema");
                value
            }
        };
        let field = ActiveField::new(name, descriptor, value, &self.context);
        self.fields.push(field);
    }

    fn add_first_available(&mut self) -> EditOutcome {
        let Some(name) = self.addable().next().map(|descriptor| descriptor.name.clone()) else {
            return EditOutcome::Rejected(InputRejection::Exhausted);
        };
        self.add_named(name)
    }

    fn add_named(&mut self, name: String) -> EditOutcome {
        if self.field(&name).is_some() {
            return EditOutcome::Rejected(InputRejection::DuplicateField { name });
        }
        let Some(descriptor) = find_descriptor(&self.descriptors, &name) else {
            return EditOutcome::Rejected(InputRejection::UnknownField { name });
        };
        let value = field::default_value(descriptor, &self.context);
        let field = ActiveField::new(name, Some(descriptor), value, &self.context);
        self.fields.push(field);
        self.commit()
    }

    fn remove_field(&mut self, name: &str) -> EditOutcome {
        let Some(index) = self.position(name) else {
            return EditOutcome::Rejected(InputRejection::InactiveField {
                name: name.to_owned(),
            });
        };
        if self.is_required(name) {
            return EditOutcome::Rejected(InputRejection::RequiredField {
                name: name.to_owned(),
            });
        }
        self.fields.remove(index);
        self.commit()
    }

    fn rename_field(&mut self, from: &str, to: String) -> EditOutcome {
        let Some(index) = self.position(from) else {
            return EditOutcome::Rejected(InputRejection::InactiveField {
                name: from.to_owned(),
            });
        };
        if from == to {
            return EditOutcome::Unchanged;
        }
        if self.is_required(from) {
            return EditOutcome::Rejected(InputRejection::RequiredField {
                name: from.to_owned(),
            });
        }
        if self.field(&to).is_some() {
            return EditOutcome::Rejected(InputRejection::DuplicateField { name: to });
        }
        let Some(descriptor) = find_descriptor(&self.descriptors, &to) else {
            return EditOutcome::Rejected(InputRejection::UnknownField { name: to });
        };
        let value = field::default_value(descriptor, &self.context);
        self.fields[index] = ActiveField::new(to, Some(descriptor), value, &self.context);
        self.commit()
    }

    fn edit_field(&mut self, name: &str, input: FieldInput) -> EditOutcome {
        let Some(index) = self.position(name) else {
            return EditOutcome::Rejected(InputRejection::InactiveField {
                name: name.to_owned(),
            });
        };
        let Some(descriptor) = find_descriptor(&self.descriptors, name) else {
            return EditOutcome::Rejected(InputRejection::UnknownField {
                name: name.to_owned(),
            });
        };
        if self.is_disabled(descriptor) {
            return EditOutcome::Rejected(InputRejection::DisabledField {
                name: name.to_owned(),
            });
        }
        match self.fields[index].edit(descriptor, input, &self.context) {
            Ok(Some(_)) => self.commit(),
            Ok(None) => EditOutcome::Unchanged,
            Err(reason) => EditOutcome::Rejected(reason),
        }
    }

    fn commit(&mut self) -> EditOutcome {
        let next = self.serialize();
        trace!(fields = next.len(), "emit parameter set");
        self.pending_echo = Some(next.clone());
        EditOutcome::Emitted(next)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    fn is_required(&self, name: &str) -> bool {
        find_descriptor(&self.descriptors, name).is_some_and(|descriptor| descriptor.required)
    }
}

/// Builds a sparse object from active fields, normalizing schema-known values.
#[must_use]
pub fn serialize_fields(
    descriptors: &[FieldDescriptor],
    fields: &[ActiveField],
    config: &EditorConfig,
) -> SparseConfigObject {
    fields
        .iter()
        .map(|active| {
            let value = match find_descriptor(descriptors, active.name()) {
                Some(descriptor) => field::normalize(descriptor, active.value(), config),
                None => active.value().clone(),
            };
            (active.name().to_owned(), value)
        })
        .collect()
}
