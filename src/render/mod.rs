mod frame;
mod null_renderer;
mod outline_renderer;

pub use frame::{CompositeView, FieldRow, FieldView, FormFrame, ListEntryView};
pub use null_renderer::NullRenderer;
pub use outline_renderer::OutlineRenderer;

use crate::error::PlotConfigResult;

/// Contract implemented by any widget toolkit that draws editor forms.
///
/// Backends receive a fully materialized `FormFrame`, so drawing code stays
/// isolated from schema lookups and edit semantics.
pub trait FormRenderer {
    fn render(&mut self, frame: &FormFrame) -> PlotConfigResult<()>;
}
