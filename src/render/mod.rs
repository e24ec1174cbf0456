mod frame;
mod mark_surface;
mod null_renderer;
mod primitives;

pub use frame::{LayerPrimitives, MarkLayer, RenderFrame};
pub use mark_surface::MarkSurface;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, Mark, RectPrimitive, TextHAlign, TextPrimitive,
    TextVAlign,
};

use crate::error::ChartResult;

/// Contract implemented by every chart display surface.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scale and filtering logic. A redraw is
/// always `clear` followed by `render`.
pub trait Renderer {
    /// Discards everything drawn by earlier passes.
    fn clear(&mut self) -> ChartResult<()>;

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
