use plot_builder::core::{FieldDescriptor, FieldKind, SparseConfigObject};
use plot_builder::editor::{EditOutcome, ParamSetEditor};
use plot_builder::error::InputRejection;
use plot_builder::interaction::{FieldInput, ParamSetAction};
use plot_builder::schema::field_descriptors;
use serde_json::{Value, json};

fn object(value: Value) -> SparseConfigObject {
    value.as_object().cloned().expect("object fixture")
}

fn point_editor(value: Value) -> ParamSetEditor {
    ParamSetEditor::new(field_descriptors("geom_point"), &object(value))
}

#[test]
fn only_present_keys_become_active() {
    let editor = point_editor(json!({"size": 3, "alpha": 0.4}));
    assert_eq!(editor.active_names(), vec!["size", "alpha"]);
    assert_eq!(editor.serialize(), object(json!({"size": 3, "alpha": 0.4})));
    assert!(editor.addable().any(|descriptor| descriptor.name == "colour"));
    assert!(!editor.addable().any(|descriptor| descriptor.name == "size"));
}

#[test]
fn add_field_picks_first_available_with_its_default() {
    let mut editor = point_editor(json!({}));
    let emitted = editor
        .dispatch(ParamSetAction::AddField)
        .into_emitted()
        .expect("add emits");
    assert_eq!(emitted, object(json!({"colour": "#000000"})));

    let emitted = editor
        .dispatch(ParamSetAction::AddField)
        .into_emitted()
        .expect("add emits");
    assert_eq!(emitted, object(json!({"colour": "#000000", "fill": "#000000"})));
}

#[test]
fn add_named_uses_authored_default_and_rejects_duplicates() {
    let mut editor = point_editor(json!({}));
    let emitted = editor
        .dispatch(ParamSetAction::AddNamed("shape".to_owned()))
        .into_emitted()
        .expect("add emits");
    assert_eq!(emitted, object(json!({"shape": 19})));

    assert_eq!(
        editor.dispatch(ParamSetAction::AddNamed("shape".to_owned())),
        EditOutcome::Rejected(InputRejection::DuplicateField {
            name: "shape".to_owned()
        })
    );
    assert!(matches!(
        editor.dispatch(ParamSetAction::AddNamed("sparkle".to_owned())),
        EditOutcome::Rejected(InputRejection::UnknownField { .. })
    ));
}

#[test]
fn composite_field_default_is_a_skeleton() {
    let mut editor = point_editor(json!({}));
    let emitted = editor
        .dispatch(ParamSetAction::AddNamed("position".to_owned()))
        .into_emitted()
        .expect("add emits");
    assert_eq!(
        emitted,
        object(json!({"position": {"type": "position_identity", "arguments": {}}}))
    );
}

#[test]
fn exhausted_schema_rejects_add() {
    let descriptors = vec![FieldDescriptor::new("only", FieldKind::Boolean)];
    let mut editor = ParamSetEditor::new(descriptors, &object(json!({"only": true})));
    assert_eq!(
        editor.dispatch(ParamSetAction::AddField),
        EditOutcome::Rejected(InputRejection::Exhausted)
    );
}

#[test]
fn removed_key_is_absent_from_emission() {
    let mut editor = point_editor(json!({"size": 3, "alpha": 0.4, "colour": "red"}));
    let emitted = editor
        .dispatch(ParamSetAction::RemoveField("alpha".to_owned()))
        .into_emitted()
        .expect("remove emits");
    assert_eq!(emitted, object(json!({"size": 3, "colour": "red"})));
    assert!(editor.field("alpha").is_none());
}

#[test]
fn required_field_cannot_be_removed_or_renamed() {
    let mut editor = ParamSetEditor::new(
        field_descriptors("facet_wrap"),
        &object(json!({"facets": ["cyl"], "ncol": 2})),
    );
    assert!(matches!(
        editor.dispatch(ParamSetAction::RemoveField("facets".to_owned())),
        EditOutcome::Rejected(InputRejection::RequiredField { .. })
    ));
    assert!(matches!(
        editor.dispatch(ParamSetAction::RenameField {
            from: "facets".to_owned(),
            to: "nrow".to_owned(),
        }),
        EditOutcome::Rejected(InputRejection::RequiredField { .. })
    ));
    assert_eq!(editor.active_names(), vec!["facets", "ncol"]);
}

#[test]
fn rename_retargets_slot_and_resets_value() {
    let mut editor = point_editor(json!({"colour": "red", "size": 4}));
    let emitted = editor
        .dispatch(ParamSetAction::RenameField {
            from: "size".to_owned(),
            to: "shape".to_owned(),
        })
        .into_emitted()
        .expect("rename emits");
    assert_eq!(emitted, object(json!({"colour": "red", "shape": 19})));
    assert_eq!(editor.active_names(), vec!["colour", "shape"]);
}

#[test]
fn number_edit_floors_unit_steps_and_clamps() {
    let mut editor = point_editor(json!({"shape": 19}));
    let emitted = editor
        .dispatch(ParamSetAction::edit("shape", FieldInput::Text("3.7".to_owned())))
        .into_emitted()
        .expect("valid number");
    assert_eq!(emitted["shape"], json!(3));

    let emitted = editor
        .dispatch(ParamSetAction::edit("shape", FieldInput::Text("40".to_owned())))
        .into_emitted()
        .expect("clamped number");
    assert_eq!(emitted["shape"], json!(25));
}

#[test]
fn invalid_number_keeps_previous_value() {
    let mut editor = point_editor(json!({"size": 2}));
    let outcome = editor.dispatch(ParamSetAction::edit(
        "size",
        FieldInput::Text("big".to_owned()),
    ));
    assert!(matches!(
        outcome,
        EditOutcome::Rejected(InputRejection::NotANumber { .. })
    ));
    assert_eq!(editor.serialize(), object(json!({"size": 2})));
}

#[test]
fn editing_inactive_field_is_rejected() {
    let mut editor = point_editor(json!({}));
    assert_eq!(
        editor.dispatch(ParamSetAction::edit("size", FieldInput::Text("2".to_owned()))),
        EditOutcome::Rejected(InputRejection::InactiveField {
            name: "size".to_owned()
        })
    );
}

#[test]
fn unknown_keys_pass_through_and_can_be_removed() {
    let mut editor = point_editor(json!({"legacy_flag": [1, 2], "size": 2}));
    assert_eq!(
        editor.serialize(),
        object(json!({"legacy_flag": [1, 2], "size": 2}))
    );

    let emitted = editor
        .dispatch(ParamSetAction::edit("size", FieldInput::Text("3".to_owned())))
        .into_emitted()
        .expect("edit emits");
    assert_eq!(emitted, object(json!({"legacy_flag": [1, 2], "size": 3})));

    assert!(matches!(
        editor.dispatch(ParamSetAction::edit(
            "legacy_flag",
            FieldInput::Text("x".to_owned())
        )),
        EditOutcome::Rejected(InputRejection::UnknownField { .. })
    ));

    let emitted = editor
        .dispatch(ParamSetAction::RemoveField("legacy_flag".to_owned()))
        .into_emitted()
        .expect("remove emits");
    assert_eq!(emitted, object(json!({"size": 3})));
}

#[test]
fn own_echo_is_ignored_once() {
    let mut editor = point_editor(json!({"size": 2}));
    let emitted = editor
        .dispatch(ParamSetAction::edit("size", FieldInput::Text("5".to_owned())))
        .into_emitted()
        .expect("edit emits");

    assert!(editor.awaiting_echo());
    assert_eq!(
        editor.dispatch(ParamSetAction::Sync(emitted.clone())),
        EditOutcome::Unchanged
    );
    assert!(!editor.awaiting_echo());
    assert_eq!(editor.serialize(), emitted);
}

#[test]
fn different_sync_after_emission_still_reconciles() {
    let mut editor = point_editor(json!({"size": 2}));
    editor
        .dispatch(ParamSetAction::edit("size", FieldInput::Text("5".to_owned())))
        .into_emitted()
        .expect("edit emits");

    editor.dispatch(ParamSetAction::Sync(object(json!({"alpha": 0.3}))));
    assert!(!editor.awaiting_echo());
    assert_eq!(editor.active_names(), vec!["alpha"]);
    assert_eq!(editor.serialize(), object(json!({"alpha": 0.3})));
}

#[test]
fn echo_is_consumed_by_the_next_sync_either_way() {
    let mut editor = point_editor(json!({"size": 2}));
    let emitted = editor
        .dispatch(ParamSetAction::AddNamed("alpha".to_owned()))
        .into_emitted()
        .expect("add emits");
    assert_eq!(emitted.keys().collect::<Vec<_>>(), vec!["size", "alpha"]);

    editor.dispatch(ParamSetAction::Sync(object(json!({"size": 2}))));
    assert_eq!(editor.active_names(), vec!["size"]);

    editor.dispatch(ParamSetAction::Sync(emitted.clone()));
    assert_eq!(editor.active_names(), vec!["size", "alpha"]);
    assert_eq!(editor.serialize(), emitted);

    editor.dispatch(ParamSetAction::Sync(object(json!({"alpha": 0.2}))));
    assert_eq!(editor.serialize(), object(json!({"alpha": 0.2})));
}

#[test]
fn parent_echo_leaves_nested_editor_intact() {
    let mut editor = ParamSetEditor::new(
        field_descriptors("theme"),
        &object(json!({
            "legend.title": {"type": "element_text", "arguments": {"size": 10}},
            "legend.position": "right"
        })),
    );
    let emitted = editor
        .dispatch(ParamSetAction::edit_nested(
            "legend.title",
            ParamSetAction::AddNamed("face".to_owned()),
        ))
        .into_emitted()
        .expect("nested add emits");

    assert_eq!(
        editor.dispatch(ParamSetAction::Sync(emitted.clone())),
        EditOutcome::Unchanged
    );
    let nested = |editor: &ParamSetEditor| -> Vec<String> {
        editor
            .field("legend.title")
            .and_then(|field| field.composite())
            .and_then(|composite| composite.arguments())
            .map(|arguments| arguments.active_names().into_iter().map(str::to_owned).collect())
            .unwrap_or_default()
    };
    assert_eq!(nested(&editor), vec!["size", "face"]);
    assert_eq!(editor.serialize(), emitted);

    let emitted = editor
        .dispatch(ParamSetAction::edit_nested(
            "legend.title",
            ParamSetAction::edit("size", FieldInput::Text("12".to_owned())),
        ))
        .into_emitted()
        .expect("nested edit emits");
    assert_eq!(emitted["legend.title"]["arguments"]["size"], json!(12));
    assert!(emitted["legend.title"]["arguments"].get("face").is_some());

    editor.dispatch(ParamSetAction::Sync(object(json!({
        "legend.title": {"type": "element_text", "arguments": {"size": 8}},
        "legend.position": "right"
    }))));
    assert_eq!(nested(&editor), vec!["size"]);
}

#[test]
fn external_sync_reconciles_active_fields() {
    let mut editor = point_editor(json!({"size": 2, "alpha": 0.5}));
    let outcome = editor.dispatch(ParamSetAction::Sync(object(
        json!({"alpha": 0.25, "stroke": null, "colour": "blue"}),
    )));
    assert_eq!(outcome, EditOutcome::Unchanged);
    assert_eq!(editor.active_names(), vec!["alpha", "stroke", "colour"]);
    assert_eq!(
        editor.serialize(),
        object(json!({"alpha": 0.25, "stroke": 0.5, "colour": "blue"}))
    );
}

#[test]
fn disabled_field_rejects_edits_while_condition_holds() {
    let mut editor = ParamSetEditor::new(
        field_descriptors("strip_nested"),
        &object(json!({"bleed": true, "by_layer_x": false})),
    );
    assert!(matches!(
        editor.dispatch(ParamSetAction::edit("by_layer_x", FieldInput::Toggle(true))),
        EditOutcome::Rejected(InputRejection::DisabledField { .. })
    ));

    editor
        .dispatch(ParamSetAction::edit("bleed", FieldInput::Toggle(false)))
        .into_emitted()
        .expect("bleed toggles");
    let emitted = editor
        .dispatch(ParamSetAction::edit("by_layer_x", FieldInput::Toggle(true)))
        .into_emitted()
        .expect("enabled again");
    assert_eq!(emitted, object(json!({"bleed": false, "by_layer_x": true})));
}

#[test]
fn frame_lists_active_rows_and_addable_fields() {
    let editor = point_editor(json!({"size": 2, "mystery": "x"}));
    let frame = editor.frame();
    assert!(!frame.nested);
    assert_eq!(frame.rows.len(), 2);
    assert_eq!(frame.rows[0].kind.as_deref(), Some("number"));
    assert_eq!(frame.rows[1].kind, None);
    assert!(frame.addable.contains(&"colour".to_owned()));
    assert!(!frame.addable.contains(&"size".to_owned()));
    frame.validate().expect("valid frame");
}
