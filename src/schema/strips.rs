use serde_json::Value;

use crate::core::FieldKind;

use super::{Table, flag, kind, select};

const CLIP: [&str; 3] = ["inherit", "on", "off"];
const SIZE: [&str; 2] = ["constant", "variable"];

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "strip_vanilla",
            vec![select("clip", &CLIP), select("size", &SIZE)],
        ),
        (
            "strip_themed",
            vec![
                select("clip", &CLIP),
                select("size", &SIZE),
                kind("text_x", FieldKind::element("element_text")),
                kind("text_y", FieldKind::element("element_text")),
                kind("background_x", FieldKind::element("element_rect")),
                kind("background_y", FieldKind::element("element_rect")),
                flag("by_layer_x", false),
                flag("by_layer_y", false),
            ],
        ),
        (
            "strip_nested",
            vec![
                select("clip", &CLIP),
                select("size", &SIZE),
                flag("bleed", false),
                kind("text_x", FieldKind::element("element_text")),
                kind("text_y", FieldKind::element("element_text")),
                kind("background_x", FieldKind::element("element_rect")),
                kind("background_y", FieldKind::element("element_rect")),
                flag("by_layer_x", false)
                    .disabled_when("bleed", Value::Bool(true)),
                flag("by_layer_y", false)
                    .disabled_when("bleed", Value::Bool(true)),
            ],
        ),
        (
            "strip_split",
            vec![
                select("position", &["top", "bottom", "left", "right"]),
                select("clip", &CLIP),
                select("size", &SIZE),
                flag("bleed", false),
                kind("text_x", FieldKind::element("element_text")),
                kind("background_x", FieldKind::element("element_rect")),
            ],
        ),
    ]
}
