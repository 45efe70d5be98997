//! ComplexHeatmap and circlize parameter tables.

use serde_json::json;

use crate::core::FieldKind;

use super::{Table, color, flag, kind, num, select, text};

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "colorRamp2",
            vec![
                kind("breaks", FieldKind::Numbers).required(),
                kind("colors", FieldKind::Colors).required(),
                select("space", &["LAB", "RGB", "sRGB", "XYZ", "HSV", "LUV"]),
            ],
        ),
        (
            "Heatmap",
            vec![
                text("name"),
                kind("col", FieldKind::ColorRamp2),
                color("na_col"),
                kind("rect_gp", FieldKind::Gpar),
                flag("border", false),
                flag("cluster_rows", true),
                flag("cluster_columns", true),
                select("clustering_distance_rows", &["euclidean", "pearson", "spearman", "kendall"]),
                select("clustering_method_rows", &["complete", "average", "ward.D2", "single"]),
                flag("show_row_names", true),
                flag("show_column_names", true),
                kind("row_names_gp", FieldKind::Gpar),
                kind("column_names_gp", FieldKind::Gpar),
                select("row_names_side", &["right", "left"]),
                select("column_names_side", &["bottom", "top"]),
                kind("row_split", FieldKind::Strings),
                kind("column_split", FieldKind::Strings),
                kind("row_gap", FieldKind::Unit),
                kind("column_gap", FieldKind::Unit),
                text("column_title"),
                kind("column_title_gp", FieldKind::Gpar),
                kind("width", FieldKind::Unit),
                kind("height", FieldKind::Unit),
                kind("heatmap_legend_param", FieldKind::List),
                flag("show_heatmap_legend", true),
            ],
        ),
        (
            "HeatmapAnnotation",
            vec![
                select("which", &["column", "row"]),
                flag("show_legend", true),
                flag("show_annotation_name", true),
                kind("annotation_name_gp", FieldKind::Gpar),
                select("annotation_name_side", &["right", "left", "top", "bottom"]),
                kind("simple_anno_size", FieldKind::Unit),
                kind("gap", FieldKind::Unit),
                kind("border", FieldKind::List),
            ],
        ),
        (
            "anno_mark",
            vec![
                kind("at", FieldKind::Numbers).required(),
                kind("labels", FieldKind::Strings).required(),
                select("side", &["right", "left", "top", "bottom"]),
                kind("labels_gp", FieldKind::Gpar),
                kind("link_width", FieldKind::Unit),
                kind("link_gp", FieldKind::Gpar),
                kind("marker", FieldKind::Marker),
            ],
        ),
        (
            "circos.par",
            vec![
                num("start.degree").with_bounds(-360.0, 360.0).with_step(1.0),
                kind("gap.degree", FieldKind::Numbers),
                num("track.height").with_default(json!(0.2)).with_bounds(0.0, 1.0).with_step(0.05),
                kind("cell.padding", FieldKind::Numbers),
                kind("canvas.xlim", FieldKind::Pair).with_default(json!([-1, 1])),
                kind("canvas.ylim", FieldKind::Pair).with_default(json!([-1, 1])),
                flag("clock.wise", true),
                flag("points.overflow.warning", true),
            ],
        ),
        (
            "circos.heatmap",
            vec![
                kind("col", FieldKind::ColorRamp2).required(),
                kind("split", FieldKind::Strings),
                num("track.height").with_default(json!(0.2)).with_bounds(0.0, 1.0).with_step(0.05),
                flag("cluster", true),
                select("rownames.side", &["none", "inside", "outside"]),
                kind("rownames.gp", FieldKind::Gpar),
                color("cell.border"),
                color("bg.border"),
                select("dend.side", &["none", "inside", "outside"]),
            ],
        ),
    ]
}
