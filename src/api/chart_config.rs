use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_VIEW_LIMIT, Margins, PlotArea, PricePolicy, Viewport};
use crate::error::{ChartError, ChartResult};

use super::RenderStyle;

/// Layout and behavior of the two listing charts.
///
/// Serializable so hosts can keep chart setup in a JSON file; every field
/// falls back to its default when absent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub margins: Margins,
    /// Fraction of each band step left empty between (and around) bars.
    pub band_padding: f64,
    /// Maximum number of filtered records drawn.
    pub view_limit: usize,
    pub point_radius_px: f64,
    /// Gap between a bar top and its price label.
    pub bar_label_offset_px: f64,
    /// Gap between a point center and its price label.
    pub point_label_offset_px: f64,
    /// Approximate number of ticks on the price axis.
    pub price_tick_count: usize,
    pub price_policy: PricePolicy,
    pub style: RenderStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            band_padding: 0.1,
            view_limit: DEFAULT_VIEW_LIMIT,
            point_radius_px: 5.0,
            bar_label_offset_px: 5.0,
            point_label_offset_px: 10.0,
            price_tick_count: 10,
            price_policy: PricePolicy::default(),
            style: RenderStyle::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    #[must_use]
    pub fn with_view_limit(mut self, view_limit: usize) -> Self {
        self.view_limit = view_limit;
        self
    }

    #[must_use]
    pub fn with_price_policy(mut self, policy: PricePolicy) -> Self {
        self.price_policy = policy;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: RenderStyle) -> Self {
        self.style = style;
        self
    }

    /// Plot region left once margins are taken out of the viewport.
    pub fn plot_area(&self) -> ChartResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.plot_area()?;
        if !self.band_padding.is_finite() || !(0.0..=1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and in [0, 1]".to_owned(),
            ));
        }
        if !self.point_radius_px.is_finite() || self.point_radius_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        for (name, value) in [
            ("bar_label_offset_px", self.bar_label_offset_px),
            ("point_label_offset_px", self.point_label_offset_px),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("`{name}` must be finite")));
            }
        }
        self.style.validate()
    }

    /// Serializes config to pretty JSON for config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}
