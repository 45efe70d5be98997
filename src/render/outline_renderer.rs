use std::fmt::Write as _;

use serde_json::Value;

use crate::error::PlotConfigResult;
use crate::render::{CompositeView, FieldRow, FieldView, FormFrame, FormRenderer};

/// Renders forms as an indented plain-text outline.
#[derive(Debug, Default)]
pub struct OutlineRenderer {
    output: String,
}

impl OutlineRenderer {
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    fn write_frame(&mut self, frame: &FormFrame, depth: usize) {
        for row in &frame.rows {
            self.write_row(row, depth);
        }
        if !frame.addable.is_empty() && depth == 0 {
            let _ = writeln!(self.output, "+ {} more", frame.addable.len());
        }
    }

    fn write_row(&mut self, row: &FieldRow, depth: usize) {
        let indent = "  ".repeat(depth);
        let mut flags = String::new();
        if row.required {
            flags.push_str(" [required]");
        }
        if row.disabled {
            flags.push_str(" [disabled]");
        }
        let kind = row.kind.as_deref().unwrap_or("?");
        match &row.view {
            FieldView::Composite(CompositeView {
                type_name, form, ..
            }) => {
                let type_name = type_name.as_deref().unwrap_or("unset");
                let _ = writeln!(self.output, "{indent}{}: {kind} = {type_name}{flags}", row.name);
                if let Some(form) = form {
                    self.write_frame(form, depth + 1);
                }
            }
            view => {
                let _ = writeln!(
                    self.output,
                    "{indent}{}: {kind} = {}{flags}",
                    row.name,
                    describe(view)
                );
            }
        }
    }
}

impl FormRenderer for OutlineRenderer {
    fn render(&mut self, frame: &FormFrame) -> PlotConfigResult<()> {
        frame.validate()?;
        self.write_frame(frame, 0);
        Ok(())
    }
}

fn describe(view: &FieldView) -> String {
    fn join<T: ToString>(items: &[T]) -> String {
        let items: Vec<String> = items.iter().map(ToString::to_string).collect();
        format!("[{}]", items.join(", "))
    }
    match view {
        FieldView::Select { selected, .. } => compact(selected),
        FieldView::Number { value, .. } => value.map_or_else(|| "-".to_owned(), |v| v.to_string()),
        FieldView::Text(text) | FieldView::Color(text) => format!("{text:?}"),
        FieldView::Toggle(flag) => flag.to_string(),
        FieldView::Numbers(numbers) => join(numbers),
        FieldView::Strings(strings) => join(strings),
        FieldView::Colors { values, .. } => join(values),
        FieldView::Pair([x, y]) => format!("({x}, {y})"),
        FieldView::List(entries) => {
            let entries: Vec<String> = entries
                .iter()
                .map(|entry| {
                    let marker = if entry.valid { "" } else { "!" };
                    format!("{}={}{marker}", entry.key, entry.raw)
                })
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        FieldView::Composite(_) => String::new(),
        FieldView::Passthrough(value) => compact(value),
    }
}

fn compact(value: &Value) -> String {
    match value {
        Value::String(text) => format!("{text:?}"),
        other => other.to_string(),
    }
}
