use crate::core::{ChartScales, PlotArea, format_tick_label, precision_for_step};
use crate::error::ChartResult;
use crate::render::{LinePrimitive, MarkLayer, RenderFrame, TextHAlign, TextPrimitive, TextVAlign};

use super::RenderStyle;

/// Adds the category axis under the plot and the price axis on its left.
pub(super) fn push_axes(
    frame: &mut RenderFrame,
    scales: &ChartScales,
    plot: PlotArea,
    style: RenderStyle,
    price_tick_count: usize,
) -> ChartResult<()> {
    push_bottom_axis(frame, scales, plot, style);
    push_left_axis(frame, scales, style, price_tick_count)
}

fn axis_line(style: RenderStyle, x1: f64, y1: f64, x2: f64, y2: f64) -> LinePrimitive {
    LinePrimitive::new(x1, y1, x2, y2, style.axis_line_width, style.axis_color)
}

fn push_bottom_axis(
    frame: &mut RenderFrame,
    scales: &ChartScales,
    plot: PlotArea,
    style: RenderStyle,
) {
    let baseline = plot.height;
    let tick_end = baseline + style.tick_size_px;
    let (range_start, range_end) = scales.band.range();

    frame.push_line(
        MarkLayer::Axes,
        axis_line(style, range_start, baseline, range_end, baseline),
    );
    if style.tick_size_px > 0.0 {
        for x in [range_start, range_end] {
            frame.push_line(MarkLayer::Axes, axis_line(style, x, baseline, x, tick_end));
        }
    }

    for (manufacturer, center) in scales.band.centers() {
        if style.tick_size_px > 0.0 {
            frame.push_line(
                MarkLayer::Axes,
                axis_line(style, center, baseline, center, tick_end),
            );
        }
        if manufacturer.is_empty() {
            continue;
        }
        frame.push_text(
            MarkLayer::Axes,
            TextPrimitive::new(
                manufacturer,
                center,
                tick_end + style.tick_padding_px,
                style.axis_label_font_size_px,
                style.axis_color,
                TextHAlign::Center,
            )
            .with_v_align(TextVAlign::Top),
        );
    }
}

fn push_left_axis(
    frame: &mut RenderFrame,
    scales: &ChartScales,
    style: RenderStyle,
    tick_count: usize,
) -> ChartResult<()> {
    let tick_start = -style.tick_size_px;
    let (range_start, range_end) = scales.value.range();

    frame.push_line(
        MarkLayer::Axes,
        axis_line(style, 0.0, range_start, 0.0, range_end),
    );
    if style.tick_size_px > 0.0 {
        for y in [range_start, range_end] {
            frame.push_line(MarkLayer::Axes, axis_line(style, tick_start, y, 0.0, y));
        }
    }

    let precision = precision_for_step(scales.value.tick_step(tick_count));
    for tick in scales.value.ticks(tick_count) {
        let y = scales.height(tick)?;
        if style.tick_size_px > 0.0 {
            frame.push_line(MarkLayer::Axes, axis_line(style, tick_start, y, 0.0, y));
        }
        frame.push_text(
            MarkLayer::Axes,
            TextPrimitive::new(
                format_tick_label(tick, precision),
                tick_start - style.tick_padding_px,
                y,
                style.axis_label_font_size_px,
                style.axis_color,
                TextHAlign::Right,
            )
            .with_v_align(TextVAlign::Middle),
        );
    }

    Ok(())
}
