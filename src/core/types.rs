use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full logical size of one chart surface, margins included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600, 400)
    }
}

/// Space reserved around the plot for axes, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 20.0, 30.0, 40.0)
    }
}

/// Inner plotting region: the viewport minus its margins.
///
/// `origin_x`/`origin_y` translate plot-local coordinates into surface
/// coordinates; marks are always produced in plot-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        margins.validate()?;

        let width = f64::from(viewport.width) - margins.left - margins.right;
        let height = f64::from(viewport.height) - margins.top - margins.bottom;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margins leave no plot area inside {}x{} viewport",
                viewport.width, viewport.height
            )));
        }

        Ok(Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width,
            height,
        })
    }
}
