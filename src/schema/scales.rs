use serde_json::json;

use crate::core::{FieldDescriptor, FieldKind};

use super::{Table, color, flag, kind, num, select, text, unit_interval};

fn continuous(axis_positions: &[&str]) -> Vec<FieldDescriptor> {
    vec![
        text("name"),
        kind("limits", FieldKind::Pair),
        kind("breaks", FieldKind::Numbers),
        kind("labels", FieldKind::Strings),
        kind("expand", FieldKind::Numbers),
        select("trans", &["identity", "log10", "log2", "sqrt", "reverse", "exp"]),
        select("position", axis_positions),
        select("guide", &["axis", "none"]),
    ]
}

fn discrete(axis_positions: &[&str]) -> Vec<FieldDescriptor> {
    vec![
        text("name"),
        kind("limits", FieldKind::Strings),
        kind("breaks", FieldKind::Strings),
        kind("labels", FieldKind::Strings),
        kind("expand", FieldKind::Numbers),
        flag("drop", true),
        select("position", axis_positions),
    ]
}

fn manual() -> Vec<FieldDescriptor> {
    vec![
        text("name"),
        kind("values", FieldKind::Colors).required(),
        kind("breaks", FieldKind::Strings),
        kind("labels", FieldKind::Strings),
        color("na.value"),
        select("guide", &["legend", "none"]),
    ]
}

fn gradient() -> Vec<FieldDescriptor> {
    vec![
        text("name"),
        color("low").with_default(json!("#132B43")),
        color("high").with_default(json!("#56B1F7")),
        kind("limits", FieldKind::Pair),
        kind("breaks", FieldKind::Numbers),
        color("na.value"),
        select("guide", &["colourbar", "legend", "none"]),
    ]
}

fn brewer() -> Vec<FieldDescriptor> {
    vec![
        text("name"),
        select("type", &["seq", "div", "qual"]),
        select(
            "palette",
            &["Blues", "Greens", "Reds", "Set1", "Set2", "Set3", "Dark2", "Paired", "Spectral", "RdBu"],
        ),
        FieldDescriptor::new("direction", FieldKind::Select).with_options([json!(1), json!(-1)]),
    ]
}

fn viridis() -> Vec<FieldDescriptor> {
    vec![
        text("name"),
        select("option", &["A", "B", "C", "D", "E", "F", "G", "H"]),
        unit_interval("alpha", 1.0),
        unit_interval("begin", 0.0),
        unit_interval("end", 1.0),
        FieldDescriptor::new("direction", FieldKind::Select).with_options([json!(1), json!(-1)]),
    ]
}


pub(super) fn tables() -> Vec<Table> {
    vec![
        ("scale_x_continuous", continuous(&["bottom", "top"])),
        ("scale_y_continuous", continuous(&["left", "right"])),
        ("scale_x_discrete", discrete(&["bottom", "top"])),
        ("scale_y_discrete", discrete(&["left", "right"])),
        ("scale_x_log10", continuous(&["bottom", "top"])),
        ("scale_y_log10", continuous(&["left", "right"])),
        ("scale_colour_manual", manual()),
        ("scale_fill_manual", manual()),
        ("scale_colour_gradient", gradient()),
        ("scale_fill_gradient", gradient()),
        (
            "scale_colour_gradient2",
            {
                let mut fields = gradient();
                fields.insert(2, color("mid").with_default(json!("white")));
                fields.push(num("midpoint").with_step(0.1));
                fields
            },
        ),
        ("scale_colour_brewer", brewer()),
        ("scale_fill_brewer", brewer()),
        ("scale_colour_viridis_d", viridis()),
        ("scale_fill_viridis_d", viridis()),
        ("scale_colour_viridis_c", viridis()),
        ("scale_fill_viridis_c", viridis()),
        (
            "scale_size",
            vec![
                text("name"),
                kind("range", FieldKind::Pair).with_default(json!([1, 6])),
                kind("breaks", FieldKind::Numbers),
            ],
        ),
        (
            "scale_alpha",
            vec![
                text("name"),
                kind("range", FieldKind::Pair).with_default(json!([0.1, 1])),
            ],
        ),
    ]
}
