use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_mark_count: usize,
    pub last_data_mark_count: usize,
    pub render_count: usize,
    pub clear_count: usize,
}

impl Renderer for NullRenderer {
    fn clear(&mut self) -> ChartResult<()> {
        self.last_mark_count = 0;
        self.last_data_mark_count = 0;
        self.clear_count += 1;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_mark_count = frame.mark_count();
        self.last_data_mark_count = frame.data_mark_count();
        self.render_count += 1;
        Ok(())
    }
}
