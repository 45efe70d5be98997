//! Small composites whose shape is fixed and composed by hand.

use serde_json::json;

use crate::core::{FieldDescriptor, FieldKind};

pub const UNIT_NAMES: [&str; 8] = ["pt", "mm", "cm", "in", "lines", "npc", "char", "native"];

pub const LINE_TYPES: [&str; 7] = [
    "solid", "dashed", "dotted", "dotdash", "longdash", "twodash", "blank",
];

/// Field list of `unit`, `arrow` or `gpar`; `None` for catalog-driven types.
#[must_use]
pub fn fields(type_name: &str) -> Option<Vec<FieldDescriptor>> {
    match type_name {
        "unit" => Some(unit()),
        "arrow" => Some(arrow()),
        "gpar" => Some(gpar()),
        _ => None,
    }
}

fn unit() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("x", FieldKind::Number)
            .with_default(json!(1))
            .with_step(0.1)
            .required(),
        FieldDescriptor::select("units", UNIT_NAMES)
            .with_default(json!("pt"))
            .required(),
    ]
}

fn arrow() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("angle", FieldKind::Number)
            .with_default(json!(30))
            .with_bounds(0.0, 90.0),
        FieldDescriptor::new("length", FieldKind::Unit),
        FieldDescriptor::select("ends", ["last", "first", "both"]),
        FieldDescriptor::select("type", ["open", "closed"]),
    ]
}

fn gpar() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("col", FieldKind::Color),
        FieldDescriptor::new("fill", FieldKind::Color),
        FieldDescriptor::new("alpha", FieldKind::Number)
            .with_default(json!(1))
            .with_bounds(0.0, 1.0)
            .with_step(0.05),
        FieldDescriptor::select("lty", LINE_TYPES),
        FieldDescriptor::new("lwd", FieldKind::Number)
            .with_default(json!(1))
            .with_min(0.0)
            .with_step(0.1),
        FieldDescriptor::new("fontsize", FieldKind::Number)
            .with_default(json!(10))
            .with_min(0.0)
            .with_step(0.5),
        FieldDescriptor::select("fontface", ["plain", "bold", "italic", "bold.italic"]),
        FieldDescriptor::new("fontfamily", FieldKind::String),
        FieldDescriptor::new("lineheight", FieldKind::Number)
            .with_default(json!(1.2))
            .with_min(0.0)
            .with_step(0.1),
    ]
}
