use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Colors, stroke widths and font sizes shared by both charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    pub bar_fill_color: Color,
    pub point_fill_color: Color,
    pub value_label_color: Color,
    pub connector_color: Color,
    pub connector_width: f64,
    pub axis_color: Color,
    pub axis_line_width: f64,
    pub axis_label_font_size_px: f64,
    pub value_label_font_size_px: f64,
    /// Length of tick marks outside the plot.
    pub tick_size_px: f64,
    /// Gap between a tick mark and its label.
    pub tick_padding_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            bar_fill_color: Color::STEELBLUE,
            point_fill_color: Color::STEELBLUE,
            value_label_color: Color::RED,
            connector_color: Color::GRAY,
            connector_width: 1.0,
            axis_color: Color::BLACK,
            axis_line_width: 1.0,
            axis_label_font_size_px: 10.0,
            value_label_font_size_px: 12.0,
            tick_size_px: 6.0,
            tick_padding_px: 3.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.bar_fill_color,
            self.point_fill_color,
            self.value_label_color,
            self.connector_color,
            self.axis_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("connector_width", self.connector_width),
            ("axis_line_width", self.axis_line_width),
            ("axis_label_font_size_px", self.axis_label_font_size_px),
            ("value_label_font_size_px", self.value_label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("tick_size_px", self.tick_size_px),
            ("tick_padding_px", self.tick_padding_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}
