use plot_builder::core::{FieldDescriptor, FieldKind, SparseConfigObject};
use plot_builder::editor::{EditOutcome, ParamSetEditor};
use plot_builder::interaction::{FieldInput, ParamSetAction};
use plot_builder::schema::{SchemaCatalog, field_descriptors};
use proptest::prelude::*;
use proptest::sample::subsequence;
use serde_json::{Value, json};
use std::collections::BTreeSet;

const SAMPLE_TYPES: [&str; 6] = [
    "geom_point",
    "element_text",
    "theme",
    "facet_wrap",
    "scale_colour_gradient",
    "Heatmap",
];

fn type_with_subset() -> impl Strategy<Value = (String, Vec<String>)> {
    prop::sample::select(SAMPLE_TYPES.to_vec()).prop_flat_map(|type_name| {
        let names: Vec<String> = field_descriptors(type_name)
            .into_iter()
            .map(|descriptor| descriptor.name)
            .collect();
        let len = names.len();
        (Just(type_name.to_owned()), subsequence(names, 0..=len))
    })
}

fn key_set(object: &SparseConfigObject) -> BTreeSet<String> {
    object.keys().cloned().collect()
}

proptest! {
    #[test]
    fn adding_a_subset_serializes_exactly_that_subset((type_name, subset) in type_with_subset()) {
        let mut editor = ParamSetEditor::new(field_descriptors(&type_name), &SparseConfigObject::new());
        for name in &subset {
            let outcome = editor.dispatch(ParamSetAction::AddNamed(name.clone()));
            prop_assert!(outcome.is_emitted());
        }
        let expected: BTreeSet<String> = subset.iter().cloned().collect();
        prop_assert_eq!(key_set(&editor.serialize()), expected);
    }

    #[test]
    fn removal_drops_key_unless_required(
        (type_name, subset) in type_with_subset(),
        pick in any::<prop::sample::Index>()
    ) {
        prop_assume!(!subset.is_empty());
        let descriptors = field_descriptors(&type_name);
        let mut editor = ParamSetEditor::new(descriptors.clone(), &SparseConfigObject::new());
        for name in &subset {
            editor.dispatch(ParamSetAction::AddNamed(name.clone()));
        }
        let before = key_set(&editor.serialize());
        let target = pick.get(&subset).clone();
        let required = descriptors
            .iter()
            .any(|descriptor| descriptor.name == target && descriptor.required);

        match editor.dispatch(ParamSetAction::RemoveField(target.clone())) {
            EditOutcome::Emitted(next) => {
                prop_assert!(!required);
                prop_assert!(!next.contains_key(&target));
                prop_assert_eq!(next.len(), before.len() - 1);
            }
            EditOutcome::Rejected(_) => {
                prop_assert!(required);
                prop_assert_eq!(key_set(&editor.serialize()), before);
            }
            EditOutcome::Unchanged => prop_assert!(false, "removal never reports unchanged"),
        }
    }

    #[test]
    fn required_fields_survive_removal_attempts(names in prop::collection::vec("[a-z]{1,6}", 1..5)) {
        let mut descriptors: Vec<FieldDescriptor> = Vec::new();
        for name in &names {
            if descriptors.iter().all(|descriptor| &descriptor.name != name) {
                descriptors.push(FieldDescriptor::new(name.clone(), FieldKind::Number).required());
            }
        }
        let value: SparseConfigObject = descriptors
            .iter()
            .map(|descriptor| (descriptor.name.clone(), json!(1)))
            .collect();
        let mut editor = ParamSetEditor::new(descriptors.clone(), &value);
        for descriptor in &descriptors {
            let outcome = editor.dispatch(ParamSetAction::RemoveField(descriptor.name.clone()));
            prop_assert!(!outcome.is_emitted());
        }
        prop_assert_eq!(editor.serialize(), value);
    }

    #[test]
    fn unit_step_coercion_is_idempotent(number in -1_000_000i64..1_000_000) {
        let descriptor = FieldDescriptor::new("n", FieldKind::Number).with_step(1.0);
        let mut editor = ParamSetEditor::new(
            vec![descriptor],
            &[("n".to_owned(), json!(0))].into_iter().collect(),
        );
        let text = number.to_string();
        let first = editor
            .dispatch(ParamSetAction::edit("n", FieldInput::Text(text.clone())))
            .into_emitted();
        let second = editor
            .dispatch(ParamSetAction::edit("n", FieldInput::Text(text)))
            .into_emitted();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.and_then(|object| object.get("n").cloned()), Some(json!(number)));
    }

    #[test]
    fn unit_step_floors_fractions(number in -10_000.0f64..10_000.0) {
        let descriptor = FieldDescriptor::new("n", FieldKind::Number).with_step(1.0);
        let mut editor = ParamSetEditor::new(
            vec![descriptor],
            &[("n".to_owned(), json!(0))].into_iter().collect(),
        );
        let emitted = editor
            .dispatch(ParamSetAction::edit("n", FieldInput::Text(number.to_string())))
            .into_emitted()
            .expect("finite input");
        prop_assert_eq!(emitted["n"].as_f64(), Some(number.floor()));
    }

    #[test]
    fn scalar_and_singleton_numbers_are_equivalent(number in -1_000i64..1_000) {
        let descriptors = vec![FieldDescriptor::new("breaks", FieldKind::Numbers)];
        let scalar = ParamSetEditor::new(
            descriptors.clone(),
            &[("breaks".to_owned(), json!(number))].into_iter().collect(),
        );
        let array = ParamSetEditor::new(
            descriptors,
            &[("breaks".to_owned(), json!([number]))].into_iter().collect(),
        );
        prop_assert_eq!(scalar.serialize(), array.serialize());
        prop_assert_eq!(&scalar.serialize()["breaks"], &json!([number]));
        prop_assert_eq!(scalar.frame(), array.frame());
    }

    #[test]
    fn legacy_pairs_normalize_to_arrays(x in -1_000i64..1_000, y in -1_000i64..1_000) {
        let descriptors = vec![FieldDescriptor::new("limits", FieldKind::Pair)];
        let editor = ParamSetEditor::new(
            descriptors,
            &[("limits".to_owned(), json!({"x": x, "y": y}))].into_iter().collect(),
        );
        prop_assert_eq!(&editor.serialize()["limits"], &json!([x, y]));
    }

    #[test]
    fn echoed_emission_never_emits_again((type_name, subset) in type_with_subset()) {
        prop_assume!(!subset.is_empty());
        let mut editor = ParamSetEditor::new(field_descriptors(&type_name), &SparseConfigObject::new());
        let mut last = None;
        for name in &subset {
            last = editor.dispatch(ParamSetAction::AddNamed(name.clone())).into_emitted();
        }
        let emitted = last.expect("at least one emission");
        let before = editor.serialize();
        prop_assert!(editor.awaiting_echo());
        prop_assert_eq!(editor.dispatch(ParamSetAction::Sync(emitted.clone())), EditOutcome::Unchanged);
        prop_assert!(!editor.awaiting_echo());
        prop_assert_eq!(editor.serialize(), before);

        let dropped = subset[0].clone();
        let mut external = emitted;
        external.shift_remove(&dropped);
        editor.dispatch(ParamSetAction::Sync(external.clone()));
        prop_assert!(editor.field(&dropped).is_none());
        prop_assert_eq!(editor.serialize(), external);
    }

    #[test]
    fn builtin_defaults_reserialize_unchanged(type_index in 0usize..SAMPLE_TYPES.len()) {
        let catalog = SchemaCatalog::builtin();
        let type_name = SAMPLE_TYPES[type_index];
        let mut editor = ParamSetEditor::new(
            catalog.field_descriptors(type_name).to_vec(),
            &SparseConfigObject::new(),
        );
        while editor.dispatch(ParamSetAction::AddField).is_emitted() {}
        let serialized = editor.serialize();
        let reloaded = ParamSetEditor::new(catalog.field_descriptors(type_name).to_vec(), &serialized);
        prop_assert_eq!(reloaded.serialize(), serialized.clone());
        prop_assert!(serialized.values().all(|value| !matches!(value, Value::Null)));
    }
}
