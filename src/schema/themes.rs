use serde_json::json;

use crate::core::{FieldDescriptor, FieldKind};

use super::{Table, kind, num, select, text};

fn text_element(name: &str) -> FieldDescriptor {
    kind(name, FieldKind::element("element_text"))
}

fn rect_element(name: &str) -> FieldDescriptor {
    kind(name, FieldKind::element("element_rect"))
}

fn line_element(name: &str) -> FieldDescriptor {
    kind(name, FieldKind::element("element_line"))
}

fn complete_theme() -> Vec<FieldDescriptor> {
    vec![
        num("base_size").with_default(json!(11)).with_min(1.0).with_step(0.5),
        select("base_family", &["", "sans", "serif", "mono"]),
        num("base_line_size").with_min(0.0).with_step(0.1),
        num("base_rect_size").with_min(0.0).with_step(0.1),
    ]
}

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "theme",
            vec![
                text_element("text"),
                line_element("line"),
                rect_element("rect"),
                text_element("plot.title"),
                text_element("plot.subtitle"),
                text_element("plot.caption"),
                rect_element("plot.background"),
                kind("plot.margin", FieldKind::Margin),
                select("plot.title.position", &["panel", "plot"]),
                text_element("axis.title"),
                text_element("axis.title.x"),
                text_element("axis.title.y"),
                text_element("axis.text"),
                text_element("axis.text.x"),
                text_element("axis.text.y"),
                line_element("axis.line"),
                line_element("axis.ticks"),
                kind("axis.ticks.length", FieldKind::Unit),
                rect_element("panel.background"),
                rect_element("panel.border"),
                line_element("panel.grid"),
                line_element("panel.grid.major"),
                line_element("panel.grid.minor"),
                kind("panel.spacing", FieldKind::Unit),
                select("legend.position", &["right", "left", "top", "bottom", "none", "inside"]),
                kind("legend.position.inside", FieldKind::Pair)
                    .disabled_when("legend.position", json!("none")),
                select("legend.direction", &["vertical", "horizontal"]),
                select("legend.justification", &["center", "left", "right", "top", "bottom"]),
                text_element("legend.title"),
                text_element("legend.text"),
                rect_element("legend.background"),
                rect_element("legend.key"),
                kind("legend.key.size", FieldKind::Unit),
                kind("legend.margin", FieldKind::Margin),
                text_element("strip.text"),
                rect_element("strip.background"),
                select("strip.placement", &["inside", "outside"]),
                num("aspect.ratio").with_min(0.0).with_step(0.1),
            ],
        ),
        ("theme_grey", complete_theme()),
        ("theme_bw", complete_theme()),
        ("theme_minimal", complete_theme()),
        ("theme_classic", complete_theme()),
        ("theme_light", complete_theme()),
        ("theme_dark", complete_theme()),
        ("theme_void", complete_theme()),
        (
            "labs",
            vec![
                text("title"),
                text("subtitle"),
                text("caption"),
                text("x"),
                text("y"),
                text("colour"),
                text("fill"),
            ],
        ),
    ]
}
