use crate::core::{CompositeFamily, FieldKind};

use super::{Table, flag, int, kind, select};

const SCALES: [&str; 4] = ["fixed", "free", "free_x", "free_y"];
const LABELLERS: [&str; 4] = ["label_value", "label_both", "label_parsed", "label_wrap_gen"];

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "facet_wrap",
            vec![
                kind("facets", FieldKind::Strings).required(),
                int("nrow").with_min(1.0),
                int("ncol").with_min(1.0),
                select("scales", &SCALES),
                select("strip.position", &["top", "bottom", "left", "right"]),
                select("labeller", &LABELLERS),
                select("dir", &["h", "v"]),
                flag("drop", true),
            ],
        ),
        (
            "facet_grid",
            vec![
                kind("rows", FieldKind::Strings),
                kind("cols", FieldKind::Strings),
                select("scales", &SCALES),
                select("space", &SCALES),
                flag("margins", false),
                select("switch", &["none", "x", "y", "both"]),
                select("labeller", &LABELLERS),
                flag("as.table", true),
            ],
        ),
        (
            "facet_wrap2",
            vec![
                kind("facets", FieldKind::Strings).required(),
                int("nrow").with_min(1.0),
                int("ncol").with_min(1.0),
                select("scales", &SCALES),
                select("axes", &["margins", "all", "x", "y"]),
                kind("strip", FieldKind::any_of(CompositeFamily::Strip)),
                flag("trim_blank", true),
            ],
        ),
        (
            "facet_nested",
            vec![
                kind("rows", FieldKind::Strings),
                kind("cols", FieldKind::Strings),
                select("scales", &SCALES),
                select("space", &SCALES),
                kind("strip", FieldKind::any_of(CompositeFamily::Strip)),
                kind("nest_line", FieldKind::element("element_line")),
                flag("solo_line", false),
                flag("resect", false),
            ],
        ),
    ]
}
