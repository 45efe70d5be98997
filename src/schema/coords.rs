use serde_json::json;

use crate::core::{FieldDescriptor, FieldKind};

use super::{Table, flag, kind, num, select};

fn cartesian() -> Vec<FieldDescriptor> {
    vec![
        kind("xlim", FieldKind::Pair),
        kind("ylim", FieldKind::Pair),
        flag("expand", true),
        select("clip", &["on", "off"]),
    ]
}

pub(super) fn tables() -> Vec<Table> {
    vec![
        ("coord_cartesian", cartesian()),
        ("coord_flip", cartesian()),
        (
            "coord_fixed",
            {
                let mut fields = cartesian();
                fields.insert(0, num("ratio").with_default(json!(1)).with_min(0.0).with_step(0.1));
                fields
            },
        ),
        (
            "coord_polar",
            vec![
                select("theta", &["x", "y"]),
                num("start").with_step(0.1),
                FieldDescriptor::new("direction", FieldKind::Select).with_options([json!(1), json!(-1)]),
                select("clip", &["on", "off"]),
            ],
        ),
        (
            "coord_trans",
            vec![
                select("x", &["identity", "log10", "sqrt", "reverse"]),
                select("y", &["identity", "log10", "sqrt", "reverse"]),
                kind("xlim", FieldKind::Pair),
                kind("ylim", FieldKind::Pair),
            ],
        ),
    ]
}
