use serde_json::json;

use crate::core::FieldKind;

use super::{Table, flag, int, kind, num, select, text};

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "guide_legend",
            vec![
                text("title"),
                select("title.position", &["top", "bottom", "left", "right"]),
                kind("title.theme", FieldKind::element("element_text")),
                int("nrow").with_min(1.0),
                int("ncol").with_min(1.0),
                flag("byrow", false),
                flag("reverse", false),
                int("order").with_min(0.0),
                kind("override.aes", FieldKind::List),
            ],
        ),
        (
            "guide_colourbar",
            vec![
                text("title"),
                select("direction", &["vertical", "horizontal"]),
                num("barwidth").with_min(0.0).with_step(0.5),
                num("barheight").with_min(0.0).with_step(0.5),
                int("nbin").with_default(json!(300)).with_min(2.0),
                flag("reverse", false),
                flag("draw.ulim", true),
                flag("draw.llim", true),
            ],
        ),
        (
            "guide_axis",
            vec![
                text("title"),
                flag("check.overlap", false),
                num("angle").with_bounds(-360.0, 360.0).with_step(15.0),
                int("n.dodge").with_default(json!(1)).with_min(1.0),
            ],
        ),
        ("guide_none", Vec::new()),
    ]
}
