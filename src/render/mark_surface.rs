use crate::error::ChartResult;
use crate::render::{Mark, RenderFrame, Renderer};

/// Retained display surface: marks stay until explicitly cleared.
///
/// Rendering appends, like adding nodes to a document, so a caller that
/// skips `clear` sees marks pile up across passes.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MarkSurface {
    marks: Vec<Mark>,
    passes: usize,
}

impl MarkSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Number of frames drawn since creation.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.passes
    }
}

impl Renderer for MarkSurface {
    fn clear(&mut self) -> ChartResult<()> {
        self.marks.clear();
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.marks.extend(frame.marks());
        self.passes += 1;
        Ok(())
    }
}
