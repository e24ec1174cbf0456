use approx::assert_abs_diff_eq;
use listing_charts::ChartConfig;
use listing_charts::api::build_chart_frames;
use listing_charts::core::{FilterState, ListingRecord};
use listing_charts::render::MarkLayer;

#[test]
fn two_points_are_joined_by_one_segment() {
    let config = ChartConfig::default();
    let dataset = vec![
        ListingRecord::new("Toyota", 15_000.0),
        ListingRecord::new("Toyota", 25_000.0),
    ];
    let frames = build_chart_frames(&dataset, &FilterState::from_selection(["Toyota"]), &config)
        .expect("frames");
    let series = frames.scatter.layer(MarkLayer::Series).expect("series");

    assert_eq!(series.circles.len(), 2);
    assert_eq!(series.lines.len(), 1);

    let segment = series.lines[0];
    assert_abs_diff_eq!(segment.x1, 270.0, epsilon = 1e-9);
    assert_abs_diff_eq!(segment.y1, 140.0, epsilon = 1e-9);
    assert_abs_diff_eq!(segment.x2, 270.0, epsilon = 1e-9);
    assert_abs_diff_eq!(segment.y2, 0.0, epsilon = 1e-9);

    for circle in &series.circles {
        assert_eq!(circle.radius, 5.0);
    }
}

#[test]
fn point_labels_sit_ten_pixels_above_points() {
    let config = ChartConfig::default();
    let dataset = vec![
        ListingRecord::new("Honda", 12_345.5),
        ListingRecord::new("Ford", 24_691.0),
    ];
    let frames = build_chart_frames(
        &dataset,
        &FilterState::from_selection(["Honda", "Ford"]),
        &config,
    )
    .expect("frames");
    let circles = &frames.scatter.layer(MarkLayer::Series).expect("series").circles;
    let labels = &frames.scatter.layer(MarkLayer::ValueLabels).expect("labels").texts;

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].text, "12345.5");
    assert_eq!(labels[1].text, "24691");
    for (label, circle) in labels.iter().zip(circles) {
        assert_abs_diff_eq!(label.x, circle.cx, epsilon = 1e-9);
        assert_abs_diff_eq!(label.y, circle.cy - 10.0, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(circles[1].cy, 0.0, epsilon = 1e-9);
}

#[test]
fn segments_follow_view_order_not_category_order() {
    let config = ChartConfig::default();
    let dataset = vec![
        ListingRecord::new("Honda", 10.0),
        ListingRecord::new("Ford", 20.0),
        ListingRecord::new("Honda", 30.0),
    ];
    let frames = build_chart_frames(
        &dataset,
        &FilterState::from_selection(["Honda", "Ford"]),
        &config,
    )
    .expect("frames");
    let series = frames.scatter.layer(MarkLayer::Series).expect("series");

    assert_eq!(series.lines.len(), 2);
    // Honda -> Ford -> back to Honda.
    assert!(series.lines[0].x2 > series.lines[0].x1);
    assert!(series.lines[1].x2 < series.lines[1].x1);
    assert_abs_diff_eq!(series.lines[1].x2, series.lines[0].x1, epsilon = 1e-9);
    for (line, pair) in series.lines.iter().zip(series.circles.windows(2)) {
        assert_eq!((line.x1, line.y1), (pair[0].cx, pair[0].cy));
        assert_eq!((line.x2, line.y2), (pair[1].cx, pair[1].cy));
    }
}

#[test]
fn single_point_has_no_segment() {
    let config = ChartConfig::default();
    let dataset = vec![ListingRecord::new("Kia", 9_000.0)];
    let frames =
        build_chart_frames(&dataset, &FilterState::from_selection(["Kia"]), &config).expect("frames");
    let series = frames.scatter.layer(MarkLayer::Series).expect("series");

    assert_eq!(series.circles.len(), 1);
    assert!(series.lines.is_empty());
}

#[test]
fn zero_prices_put_points_on_plot_bottom() {
    let config = ChartConfig::default();
    let dataset = vec![
        ListingRecord::new("Kia", 0.0),
        ListingRecord::new("Audi", 0.0),
    ];
    let frames = build_chart_frames(
        &dataset,
        &FilterState::from_selection(["Kia", "Audi"]),
        &config,
    )
    .expect("frames");
    let series = frames.scatter.layer(MarkLayer::Series).expect("series");

    assert!(series.circles.iter().all(|circle| circle.cy == 350.0));
    assert_eq!(series.lines.len(), 1);
    assert_eq!(series.lines[0].y1, series.lines[0].y2);
}

#[test]
fn empty_view_renders_axes_only() {
    let config = ChartConfig::default();
    let frames = build_chart_frames(&[], &FilterState::from_selection(["Kia"]), &config)
        .expect("frames");

    assert_eq!(frames.scatter.data_mark_count(), 0);
    assert_eq!(frames.scatter.mark_count(), 8);
}

#[test]
fn scatter_and_bar_share_axes() {
    let config = ChartConfig::default();
    let dataset = vec![
        ListingRecord::new("Honda", 18_000.0),
        ListingRecord::new("Toyota", 21_000.0),
    ];
    let frames = build_chart_frames(
        &dataset,
        &FilterState::from_selection(["Honda", "Toyota"]),
        &config,
    )
    .expect("frames");

    assert_eq!(
        frames.bar.layer(MarkLayer::Axes),
        frames.scatter.layer(MarkLayer::Axes)
    );
}
