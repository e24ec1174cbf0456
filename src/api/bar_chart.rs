use tracing::trace;

use crate::core::{ChartScales, FilteredView, format_price_literal};
use crate::error::ChartResult;
use crate::render::{MarkLayer, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::ChartConfig;
use super::axis_builder::push_axes;

/// Builds the bar chart frame: one bar and one price label per record,
/// plus both axes.
///
/// Bars start at their manufacturer's band, span the band width and grow
/// up from the plot bottom to the price height. Labels sit centered above
/// the bar top by `bar_label_offset_px`.
pub fn render_bars(
    view: &FilteredView,
    scales: &ChartScales,
    config: &ChartConfig,
) -> ChartResult<RenderFrame> {
    let plot = config.plot_area()?;
    let style = config.style;
    let bandwidth = scales.band.bandwidth();
    let mut frame = RenderFrame::new(config.viewport, plot);

    for record in view.records() {
        let x = scales.position(&record.manufacturer)?;
        let top = scales.height(record.price)?;
        frame.push_rect(
            MarkLayer::Series,
            RectPrimitive::new(x, top, bandwidth, plot.height - top, style.bar_fill_color),
        );
        frame.push_text(
            MarkLayer::ValueLabels,
            TextPrimitive::new(
                format_price_literal(record.price),
                x + bandwidth / 2.0,
                top - config.bar_label_offset_px,
                style.value_label_font_size_px,
                style.value_label_color,
                TextHAlign::Center,
            ),
        );
    }

    push_axes(&mut frame, scales, plot, style, config.price_tick_count)?;
    trace!(
        bars = view.len(),
        marks = frame.mark_count(),
        "built bar chart frame"
    );
    Ok(frame)
}
