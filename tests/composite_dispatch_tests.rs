use plot_builder::composite::{CompositeEditor, CompositeState, choices_for_kind};
use plot_builder::core::{CompositeFamily, FieldDescriptor, FieldKind, SparseConfigObject};
use plot_builder::editor::{EditOutcome, EditorContext, ParamSetEditor};
use plot_builder::error::InputRejection;
use plot_builder::interaction::{CompositeAction, FieldInput, ParamSetAction};
use plot_builder::render::FieldView;
use plot_builder::schema::{SchemaCatalog, field_descriptors};
use serde_json::{Value, json};

fn object(value: Value) -> SparseConfigObject {
    value.as_object().cloned().expect("object fixture")
}

#[test]
fn switching_to_blank_keeps_siblings_byte_identical() {
    let value = object(json!({
        "legend.title": {"type": "element_text", "arguments": {"size": 10}},
        "legend.text": {"type": "element_text", "arguments": {}}
    }));
    let mut editor = ParamSetEditor::new(field_descriptors("theme"), &value);

    let emitted = editor
        .dispatch(ParamSetAction::select_type("legend.title", "element_blank"))
        .into_emitted()
        .expect("type switch emits");

    assert_eq!(
        emitted["legend.title"],
        json!({"type": "element_blank", "arguments": {}})
    );
    assert_eq!(
        serde_json::to_string(&emitted["legend.text"]).expect("serialize"),
        serde_json::to_string(&value["legend.text"]).expect("serialize")
    );
}

#[test]
fn generic_element_slot_switch_discards_arguments() {
    let descriptors = vec![
        FieldDescriptor::new("title", FieldKind::any_of(CompositeFamily::Element)),
        FieldDescriptor::new("subtitle", FieldKind::element("element_text")),
    ];
    let value = object(json!({
        "title": {"type": "element_text", "arguments": {"size": 10, "face": "bold"}},
        "subtitle": {"type": "element_text", "arguments": {"size": 8}}
    }));
    let mut editor = ParamSetEditor::new(descriptors, &value);

    let emitted = editor
        .dispatch(ParamSetAction::select_type("title", "element_rect"))
        .into_emitted()
        .expect("type switch emits");
    assert_eq!(emitted["title"], json!({"type": "element_rect", "arguments": {}}));
    assert_eq!(emitted["subtitle"], value["subtitle"]);
}

#[test]
fn fixed_text_slot_switches_to_rect_and_keeps_siblings() {
    let value = object(json!({
        "legend.title": {"type": "element_text", "arguments": {"size": 10}},
        "legend.text": {"type": "element_text", "arguments": {}}
    }));
    let mut editor = ParamSetEditor::new(field_descriptors("theme"), &value);

    let emitted = editor
        .dispatch(ParamSetAction::select_type("legend.title", "element_rect"))
        .into_emitted()
        .expect("type switch emits");
    assert_eq!(
        emitted["legend.title"],
        json!({"type": "element_rect", "arguments": {}})
    );
    assert_eq!(
        serde_json::to_string(&emitted["legend.text"]).expect("serialize"),
        serde_json::to_string(&value["legend.text"]).expect("serialize")
    );

    let rect = editor
        .field("legend.title")
        .and_then(|field| field.composite())
        .expect("composite field");
    assert_eq!(rect.type_name(), Some("element_rect"));
    assert!(rect.arguments().is_some_and(|arguments| arguments.active_fields().is_empty()));
}

#[test]
fn fixed_element_slot_defaults_to_its_own_variant() {
    let mut editor = ParamSetEditor::new(field_descriptors("theme"), &SparseConfigObject::new());
    let emitted = editor
        .dispatch(ParamSetAction::AddNamed("legend.title".to_owned()))
        .into_emitted()
        .expect("add emits");
    assert_eq!(
        emitted["legend.title"],
        json!({"type": "element_text", "arguments": {}})
    );
}

#[test]
fn element_slot_rejects_other_families() {
    let value = object(json!({"legend.title": {"type": "element_text", "arguments": {}}}));
    let mut editor = ParamSetEditor::new(field_descriptors("theme"), &value);
    assert_eq!(
        editor.dispatch(ParamSetAction::select_type("legend.title", "position_jitter")),
        EditOutcome::Rejected(InputRejection::InvalidType {
            type_name: "position_jitter".to_owned()
        })
    );
}

#[test]
fn selecting_current_type_is_a_no_op() {
    let value = object(json!({"position": {"type": "position_dodge", "arguments": {"width": 0.5}}}));
    let mut editor = ParamSetEditor::new(field_descriptors("geom_bar"), &value);
    assert_eq!(
        editor.dispatch(ParamSetAction::select_type("position", "position_dodge")),
        EditOutcome::Unchanged
    );
    assert_eq!(editor.serialize(), value);
}

#[test]
fn nested_edit_rebuilds_parent_object() {
    let value = object(json!({
        "position": {"type": "position_jitter", "arguments": {"width": 0.2}},
        "alpha": 0.5
    }));
    let mut editor = ParamSetEditor::new(field_descriptors("geom_point"), &value);

    let emitted = editor
        .dispatch(ParamSetAction::edit_nested(
            "position",
            ParamSetAction::AddNamed("seed".to_owned()),
        ))
        .into_emitted()
        .expect("nested add emits");
    assert_eq!(
        emitted,
        object(json!({
            "position": {"type": "position_jitter", "arguments": {"width": 0.2, "seed": 0}},
            "alpha": 0.5
        }))
    );

    let emitted = editor
        .dispatch(ParamSetAction::edit_nested(
            "position",
            ParamSetAction::RemoveField("width".to_owned()),
        ))
        .into_emitted()
        .expect("nested remove emits");
    assert_eq!(
        emitted["position"],
        json!({"type": "position_jitter", "arguments": {"seed": 0}})
    );
}

#[test]
fn three_levels_of_nesting_stay_sparse() {
    let value = object(json!({
        "strip": {"type": "strip_themed", "arguments": {
            "text_x": {"type": "element_text", "arguments": {}}
        }}
    }));
    let mut editor = ParamSetEditor::new(field_descriptors("facet_wrap2"), &value);
    let emitted = editor
        .dispatch(ParamSetAction::edit_nested(
            "strip",
            ParamSetAction::edit_nested("text_x", ParamSetAction::AddNamed("size".to_owned())),
        ))
        .into_emitted()
        .expect("deep edit emits");
    assert_eq!(
        emitted,
        object(json!({
            "strip": {"type": "strip_themed", "arguments": {
                "text_x": {"type": "element_text", "arguments": {"size": 11}}
            }}
        }))
    );
}

#[test]
fn blank_to_concrete_starts_from_required_defaults() {
    let mut editor = CompositeEditor::for_kind(&FieldKind::Unit, EditorContext::builtin());
    assert!(matches!(editor.state(), CompositeState::Uninitialized));

    let value = editor
        .apply(CompositeAction::SelectType("unit".to_owned()))
        .expect("unit is a choice");
    assert_eq!(
        value,
        Some(json!({"type": "unit", "arguments": {"x": 1, "units": "pt"}}))
    );
    assert!(matches!(
        editor.apply(CompositeAction::arguments(ParamSetAction::RemoveField(
            "units".to_owned()
        ))),
        Err(InputRejection::RequiredField { .. })
    ));
}

#[test]
fn hand_composed_unit_edits_emit_each_time() {
    let mut editor = CompositeEditor::for_kind(&FieldKind::Unit, EditorContext::builtin());
    editor.sync(&json!({"type": "unit", "arguments": {"x": 2, "units": "mm"}}));
    let value = editor
        .apply(CompositeAction::arguments(ParamSetAction::edit(
            "units",
            FieldInput::Choose("cm".to_owned()),
        )))
        .expect("valid unit")
        .expect("changed");
    assert_eq!(value, json!({"type": "unit", "arguments": {"x": 2, "units": "cm"}}));

    assert!(matches!(
        editor.apply(CompositeAction::arguments(ParamSetAction::edit(
            "units",
            FieldInput::Choose("furlong".to_owned()),
        ))),
        Err(InputRejection::NotAnOption { .. })
    ));
}

#[test]
fn family_choices_follow_catalog_registration() {
    let mut catalog = SchemaCatalog::with_builtin_types();
    catalog
        .register(
            "position_wiggle",
            vec![FieldDescriptor::new("amount", FieldKind::Number)],
        )
        .expect("register custom position");
    let choices = choices_for_kind(&FieldKind::any_of(CompositeFamily::Position), &catalog);
    assert_eq!(choices.first().map(String::as_str), Some("position_identity"));
    assert_eq!(choices.last().map(String::as_str), Some("position_wiggle"));
}

#[test]
fn composite_row_exposes_nested_form() {
    let value = object(json!({
        "legend.title": {"type": "element_text", "arguments": {"size": 10}},
        "legend.text": {"type": "element_blank"}
    }));
    let editor = ParamSetEditor::new(field_descriptors("theme"), &value);
    let frame = editor.frame();

    let FieldView::Composite(title) = &frame.rows[0].view else {
        panic!("legend.title should render as a composite");
    };
    assert_eq!(title.type_name.as_deref(), Some("element_text"));
    assert_eq!(
        title.choices,
        vec!["element_text", "element_rect", "element_line", "element_blank"]
    );
    let form = title.form.as_ref().expect("populated form");
    assert!(form.nested);
    assert_eq!(form.rows.len(), 1);

    let FieldView::Composite(text) = &frame.rows[1].view else {
        panic!("legend.text should render as a composite");
    };
    assert!(text.blank);
    assert!(text.form.is_none());
    assert_eq!(frame.total_rows(), 3);
}
