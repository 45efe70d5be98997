use serde_json::json;

use super::{Table, flag, int, num, select, unit_interval};

pub(super) fn tables() -> Vec<Table> {
    vec![
        ("position_identity", Vec::new()),
        (
            "position_dodge",
            vec![
                num("width").with_default(json!(0.9)).with_min(0.0).with_step(0.05),
                select("preserve", &["total", "single"]),
            ],
        ),
        (
            "position_dodge2",
            vec![
                num("width").with_default(json!(0.9)).with_min(0.0).with_step(0.05),
                select("preserve", &["total", "single"]),
                num("padding").with_default(json!(0.1)).with_min(0.0).with_step(0.05),
                flag("reverse", false),
            ],
        ),
        (
            "position_jitter",
            vec![
                num("width").with_default(json!(0.4)).with_min(0.0).with_step(0.05),
                num("height").with_default(json!(0.4)).with_min(0.0).with_step(0.05),
                int("seed"),
            ],
        ),
        (
            "position_jitterdodge",
            vec![
                num("jitter.width").with_min(0.0).with_step(0.05),
                num("jitter.height").with_min(0.0).with_step(0.05),
                num("dodge.width").with_default(json!(0.75)).with_min(0.0).with_step(0.05),
                int("seed"),
            ],
        ),
        (
            "position_nudge",
            vec![num("x").with_step(0.1), num("y").with_step(0.1)],
        ),
        (
            "position_stack",
            vec![unit_interval("vjust", 1.0), flag("reverse", false)],
        ),
        (
            "position_fill",
            vec![unit_interval("vjust", 1.0), flag("reverse", false)],
        ),
    ]
}
