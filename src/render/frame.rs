use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, Mark, RectPrimitive, TextPrimitive};

/// Draw layers of one chart, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkLayer {
    /// Bars, points and connecting segments.
    Series,
    /// Literal price labels next to each data mark.
    ValueLabels,
    /// Domain lines, ticks and tick labels.
    Axes,
}

impl MarkLayer {
    pub const CANONICAL: [Self; 3] = [Self::Series, Self::ValueLabels, Self::Axes];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPrimitives {
    pub kind: MarkLayer,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn empty(kind: MarkLayer) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len() + self.rects.len() + self.circles.len() + self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marks in paint order: lines, rects, circles, then texts.
    pub fn marks(&self) -> impl Iterator<Item = Mark> + '_ {
        self.lines
            .iter()
            .copied()
            .map(Mark::Line)
            .chain(self.rects.iter().copied().map(Mark::Rect))
            .chain(self.circles.iter().copied().map(Mark::Circle))
            .chain(self.texts.iter().cloned().map(Mark::Text))
    }
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Coordinates are plot-local; `plot.origin_x`/`plot.origin_y` give the
/// translation onto the surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot: PlotArea) -> Self {
        Self {
            viewport,
            plot,
            layers: MarkLayer::CANONICAL
                .into_iter()
                .map(LayerPrimitives::empty)
                .collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: MarkLayer) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    fn layer_mut(&mut self, kind: MarkLayer) -> &mut LayerPrimitives {
        let index = match self.layers.iter().position(|layer| layer.kind == kind) {
            Some(index) => index,
            None => {
                self.layers.push(LayerPrimitives::empty(kind));
                self.layers.len() - 1
            }
        };
        &mut self.layers[index]
    }

    pub fn push_line(&mut self, kind: MarkLayer, line: LinePrimitive) {
        self.layer_mut(kind).lines.push(line);
    }

    pub fn push_rect(&mut self, kind: MarkLayer, rect: RectPrimitive) {
        self.layer_mut(kind).rects.push(rect);
    }

    pub fn push_circle(&mut self, kind: MarkLayer, circle: CirclePrimitive) {
        self.layer_mut(kind).circles.push(circle);
    }

    pub fn push_text(&mut self, kind: MarkLayer, text: TextPrimitive) {
        self.layer_mut(kind).texts.push(text);
    }

    /// All marks in paint order.
    #[must_use]
    pub fn marks(&self) -> Vec<Mark> {
        self.layers.iter().flat_map(LayerPrimitives::marks).collect()
    }

    #[must_use]
    pub fn mark_count(&self) -> usize {
        self.layers.iter().map(LayerPrimitives::len).sum()
    }

    /// Marks that represent data rather than axes.
    #[must_use]
    pub fn data_mark_count(&self) -> usize {
        self.layers
            .iter()
            .filter(|layer| layer.kind != MarkLayer::Axes)
            .map(LayerPrimitives::len)
            .sum()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            for line in &layer.lines {
                line.validate()?;
            }
            for rect in &layer.rects {
                rect.validate()?;
            }
            for circle in &layer.circles {
                circle.validate()?;
            }
            for text in &layer.texts {
                text.validate()?;
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mark_count() == 0
    }
}
