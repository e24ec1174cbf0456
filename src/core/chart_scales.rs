use crate::core::{BandScale, FilteredView, LinearScale};
use crate::error::{ChartError, ChartResult};

/// Position and height scales shared by both charts for one redraw.
///
/// Pure function of the view and plot size; rebuilt on every redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    pub band: BandScale,
    pub value: LinearScale,
}

impl ChartScales {
    pub fn compute(
        view: &FilteredView,
        plot_width: f64,
        plot_height: f64,
        band_padding: f64,
    ) -> ChartResult<Self> {
        if !plot_width.is_finite() || plot_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "plot width must be finite and > 0".to_owned(),
            ));
        }

        let band = BandScale::new(view.manufacturers(), 0.0, plot_width, band_padding)?;
        let value = LinearScale::for_prices(view.max_price(), plot_height)?;
        Ok(Self { band, value })
    }

    /// Left band edge of `manufacturer`.
    pub fn position(&self, manufacturer: &str) -> ChartResult<f64> {
        self.band.position(manufacturer)
    }

    /// Band center of `manufacturer`.
    pub fn center(&self, manufacturer: &str) -> ChartResult<f64> {
        self.band.center(manufacturer)
    }

    /// Vertical pixel of `price`; `0` is the plot bottom.
    pub fn height(&self, price: f64) -> ChartResult<f64> {
        self.value.domain_to_pixel(price)
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.value.range().0
    }
}
