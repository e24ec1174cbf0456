use tracing::trace;

use crate::core::{ChartScales, FilteredView, format_price_literal};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, LinePrimitive, MarkLayer, RenderFrame, TextHAlign, TextPrimitive,
};

use super::ChartConfig;
use super::axis_builder::push_axes;

/// Builds the connected scatter frame.
///
/// Every record becomes a point at its band center and price height with a
/// price label `point_label_offset_px` above it. Consecutive records, in
/// view order, are joined by a straight segment.
pub fn render_scatter(
    view: &FilteredView,
    scales: &ChartScales,
    config: &ChartConfig,
) -> ChartResult<RenderFrame> {
    let plot = config.plot_area()?;
    let style = config.style;
    let mut frame = RenderFrame::new(config.viewport, plot);

    let mut points = Vec::with_capacity(view.len());
    for record in view.records() {
        points.push((
            scales.center(&record.manufacturer)?,
            scales.height(record.price)?,
        ));
    }

    for pair in points.windows(2) {
        let ((x1, y1), (x2, y2)) = (pair[0], pair[1]);
        frame.push_line(
            MarkLayer::Series,
            LinePrimitive::new(x1, y1, x2, y2, style.connector_width, style.connector_color),
        );
    }

    for (record, &(x, y)) in view.records().iter().zip(&points) {
        frame.push_circle(
            MarkLayer::Series,
            CirclePrimitive::new(x, y, config.point_radius_px, style.point_fill_color),
        );
        frame.push_text(
            MarkLayer::ValueLabels,
            TextPrimitive::new(
                format_price_literal(record.price),
                x,
                y - config.point_label_offset_px,
                style.value_label_font_size_px,
                style.value_label_color,
                TextHAlign::Center,
            ),
        );
    }

    push_axes(&mut frame, scales, plot, style, config.price_tick_count)?;
    trace!(
        points = points.len(),
        segments = points.len().saturating_sub(1),
        marks = frame.mark_count(),
        "built scatter chart frame"
    );
    Ok(frame)
}
