use crate::core::ticks::{TickValues, nice_tick_step, nice_ticks};
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// price axis grows upward. A zero-width domain maps every value onto
/// `range_start` instead of dividing by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    /// Price scale for a plot of `plot_height` pixels: `[0, max_price]`
    /// onto `[plot_height, 0]`.
    pub fn for_prices(max_price: f64, plot_height: f64) -> ChartResult<Self> {
        if !max_price.is_finite() || max_price < 0.0 {
            return Err(ChartError::InvalidData(
                "max price must be finite and >= 0".to_owned(),
            ));
        }
        if !plot_height.is_finite() || plot_height <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot height must be finite and > 0".to_owned(),
            ));
        }
        Self::new(0.0, max_price, plot_height, 0.0)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        if self.is_degenerate() {
            return Ok(self.range_start);
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        nice_tick_step(self.domain_start, self.domain_end, count)
    }
}
