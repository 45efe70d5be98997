use crate::error::PlotConfigResult;
use crate::render::{FormFrame, FormRenderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests catch malformed forms.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_row_count: usize,
}

impl FormRenderer for NullRenderer {
    fn render(&mut self, frame: &FormFrame) -> PlotConfigResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_row_count = frame.total_rows();
        Ok(())
    }
}
