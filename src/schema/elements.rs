use serde_json::json;

use crate::composite::fixed_shape::{LINE_TYPES, UNIT_NAMES};
use crate::core::{ELEMENT_BLANK, FieldKind};

use super::{Table, color, flag, kind, num, select, text};

const FONT_FACES: [&str; 4] = ["plain", "italic", "bold", "bold.italic"];

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "element_text",
            vec![
                select("family", &["sans", "serif", "mono"]),
                select("face", &FONT_FACES),
                color("colour"),
                num("size").with_default(json!(11)).with_min(0.0).with_step(0.5),
                num("hjust").with_default(json!(0.5)).with_bounds(0.0, 1.0).with_step(0.1),
                num("vjust").with_default(json!(0.5)).with_bounds(0.0, 1.0).with_step(0.1),
                num("angle").with_bounds(-360.0, 360.0).with_step(15.0),
                num("lineheight").with_default(json!(0.9)).with_min(0.0).with_step(0.1),
                kind("margin", FieldKind::Margin),
                flag("inherit.blank", false),
            ],
        ),
        (
            "element_rect",
            vec![
                color("fill"),
                color("colour"),
                num("linewidth").with_default(json!(0.5)).with_min(0.0).with_step(0.1),
                select("linetype", &LINE_TYPES),
                flag("inherit.blank", false),
            ],
        ),
        (
            "element_line",
            vec![
                color("colour"),
                num("linewidth").with_default(json!(0.5)).with_min(0.0).with_step(0.1),
                select("linetype", &LINE_TYPES),
                select("lineend", &["butt", "round", "square"]),
                kind("arrow", FieldKind::Arrow),
                flag("inherit.blank", false),
            ],
        ),
        (ELEMENT_BLANK, Vec::new()),
        (
            "margin",
            vec![
                num("t").with_step(0.5),
                num("r").with_step(0.5),
                num("b").with_step(0.5),
                num("l").with_step(0.5),
                select("unit", &UNIT_NAMES).with_default(json!("pt")),
            ],
        ),
        (
            "marker",
            vec![
                select("shape", &["circle", "square", "triangle", "diamond", "cross"]),
                num("size").with_default(json!(2)).with_min(0.0).with_step(0.5),
                color("col"),
                color("fill"),
                text("label"),
            ],
        ),
    ]
}
