use serde_json::json;

use crate::composite::fixed_shape::LINE_TYPES;
use crate::core::{CompositeFamily, FieldDescriptor, FieldKind};

use super::{Table, color, flag, int, kind, num, select, text, unit_interval};

/// Parameters shared by every geometry layer.
fn common() -> Vec<FieldDescriptor> {
    vec![
        kind("position", FieldKind::any_of(CompositeFamily::Position)),
        flag("na.rm", false),
        select("show.legend", &["NA", "TRUE", "FALSE"]),
        flag("inherit.aes", true),
    ]
}

fn layer(mut own: Vec<FieldDescriptor>) -> Vec<FieldDescriptor> {
    own.extend(common());
    own
}

fn stroke() -> Vec<FieldDescriptor> {
    vec![
        color("colour"),
        num("linewidth").with_default(json!(0.5)).with_min(0.0).with_step(0.1),
        select("linetype", &LINE_TYPES),
        unit_interval("alpha", 1.0),
    ]
}

fn filled() -> Vec<FieldDescriptor> {
    let mut fields = vec![color("fill")];
    fields.extend(stroke());
    fields
}

pub(super) fn tables() -> Vec<Table> {
    vec![
        (
            "geom_point",
            layer(vec![
                color("colour"),
                color("fill"),
                num("size").with_default(json!(1.5)).with_min(0.0).with_step(0.5),
                int("shape").with_default(json!(19)).with_bounds(0.0, 25.0),
                num("stroke").with_default(json!(0.5)).with_min(0.0).with_step(0.1),
                unit_interval("alpha", 1.0),
            ]),
        ),
        (
            "geom_line",
            layer({
                let mut fields = stroke();
                fields.push(select("lineend", &["butt", "round", "square"]));
                fields.push(kind("arrow", FieldKind::Arrow));
                fields
            }),
        ),
        (
            "geom_bar",
            layer({
                let mut fields = filled();
                fields.push(num("width").with_default(json!(0.9)).with_bounds(0.0, 1.0).with_step(0.05));
                fields.push(select("stat", &["count", "identity"]));
                fields
            }),
        ),
        (
            "geom_col",
            layer({
                let mut fields = filled();
                fields.push(num("width").with_default(json!(0.9)).with_bounds(0.0, 1.0).with_step(0.05));
                fields
            }),
        ),
        (
            "geom_histogram",
            layer({
                let mut fields = filled();
                fields.push(int("bins").with_default(json!(30)).with_min(1.0));
                fields.push(num("binwidth").with_min(0.0));
                fields
            }),
        ),
        (
            "geom_boxplot",
            layer({
                let mut fields = filled();
                fields.push(num("width").with_default(json!(0.75)).with_bounds(0.0, 1.0).with_step(0.05));
                fields.push(flag("notch", false));
                fields.push(flag("varwidth", false));
                fields.push(color("outlier.colour"));
                fields.push(int("outlier.shape").with_default(json!(19)).with_bounds(0.0, 25.0));
                fields.push(num("outlier.size").with_default(json!(1.5)).with_min(0.0).with_step(0.5));
                fields
            }),
        ),
        (
            "geom_violin",
            layer({
                let mut fields = filled();
                fields.push(flag("trim", true));
                fields.push(select("scale", &["area", "count", "width"]));
                fields.push(kind("draw_quantiles", FieldKind::Numbers));
                fields
            }),
        ),
        (
            "geom_density",
            layer({
                let mut fields = filled();
                fields.push(num("adjust").with_default(json!(1)).with_min(0.0).with_step(0.1));
                fields.push(select("kernel", &["gaussian", "epanechnikov", "rectangular", "triangular"]));
                fields
            }),
        ),
        (
            "geom_smooth",
            layer({
                let mut fields = filled();
                fields.push(select("method", &["lm", "loess", "gam", "glm"]));
                fields.push(text("formula"));
                fields.push(flag("se", true));
                fields.push(unit_interval("level", 0.95));
                fields
            }),
        ),
        (
            "geom_text",
            layer(vec![
                color("colour"),
                num("size").with_default(json!(3.88)).with_min(0.0).with_step(0.5),
                num("angle").with_bounds(-360.0, 360.0).with_step(15.0),
                num("hjust").with_default(json!(0.5)).with_step(0.1),
                num("vjust").with_default(json!(0.5)).with_step(0.1),
                select("family", &["sans", "serif", "mono"]),
                select("fontface", &["plain", "bold", "italic", "bold.italic"]),
                flag("parse", false),
                flag("check_overlap", false),
                num("nudge_x").with_step(0.1),
                num("nudge_y").with_step(0.1),
            ]),
        ),
        (
            "geom_tile",
            layer({
                let mut fields = filled();
                fields.push(num("width").with_min(0.0).with_step(0.1));
                fields.push(num("height").with_min(0.0).with_step(0.1));
                fields
            }),
        ),
        (
            "geom_errorbar",
            layer({
                let mut fields = stroke();
                fields.push(num("width").with_default(json!(0.5)).with_min(0.0).with_step(0.05));
                fields
            }),
        ),
        (
            "geom_hline",
            {
                let mut fields = stroke();
                fields.push(kind("yintercept", FieldKind::Numbers).required());
                fields
            },
        ),
        (
            "geom_vline",
            {
                let mut fields = stroke();
                fields.push(kind("xintercept", FieldKind::Numbers).required());
                fields
            },
        ),
    ]
}
