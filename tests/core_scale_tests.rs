use approx::assert_abs_diff_eq;
use listing_charts::ChartError;
use listing_charts::core::{
    BandScale, ChartScales, FilterState, FilteredView, LinearScale, ListingRecord,
};

fn view_of(records: Vec<ListingRecord>) -> FilteredView {
    let filter = FilterState::from_selection(records.iter().map(|r| r.manufacturer.clone()));
    FilteredView::build(&records, &filter)
}

#[test]
fn band_scale_matches_padded_layout() {
    let scale = BandScale::new(["Toyota", "Honda", "Ford"], 0.0, 540.0, 0.1).expect("band scale");

    // step = 540 / (3 - 0.1 + 0.2)
    let step = 540.0 / 3.1;
    assert_abs_diff_eq!(scale.step(), step, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.bandwidth(), step * 0.9, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.position("Toyota").expect("toyota"), step * 0.1, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.position("Honda").expect("honda"), step * 1.1, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.position("Ford").expect("ford"), step * 2.1, epsilon = 1e-9);

    let last_end = scale.position("Ford").expect("ford") + scale.bandwidth();
    assert_abs_diff_eq!(540.0 - last_end, step * 0.1, epsilon = 1e-9);
}

#[test]
fn band_scale_rejects_unknown_category() {
    let scale = BandScale::new(["Toyota"], 0.0, 540.0, 0.1).expect("band scale");
    let err = scale.position("Honda").expect_err("unknown category");
    assert!(matches!(err, ChartError::UnknownCategory { ref name } if name == "Honda"));
}

#[test]
fn band_scale_rejects_invalid_padding_and_range() {
    assert!(BandScale::new(["A"], 0.0, 100.0, 1.5).is_err());
    assert!(BandScale::new(["A"], 0.0, 100.0, f64::NAN).is_err());
    assert!(BandScale::new(["A"], 100.0, 0.0, 0.1).is_err());
}

#[test]
fn price_scale_is_inverted_so_bars_grow_up() {
    let scale = LinearScale::for_prices(25_000.0, 350.0).expect("price scale");
    assert_eq!(scale.domain_to_pixel(0.0).expect("zero"), 350.0);
    assert_eq!(scale.domain_to_pixel(25_000.0).expect("max"), 0.0);
    assert_abs_diff_eq!(scale.domain_to_pixel(15_000.0).expect("mid"), 140.0, epsilon = 1e-9);
}

#[test]
fn degenerate_price_domain_maps_to_plot_bottom() {
    let scale = LinearScale::for_prices(0.0, 350.0).expect("price scale");
    assert!(scale.is_degenerate());
    assert_eq!(scale.domain_to_pixel(0.0).expect("zero"), 350.0);
    assert_eq!(scale.domain_to_pixel(10.0).expect("any"), 350.0);
}

#[test]
fn linear_scale_rejects_non_finite_input() {
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    assert!(LinearScale::for_prices(-1.0, 350.0).is_err());
    let scale = LinearScale::for_prices(100.0, 350.0).expect("price scale");
    assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
}

#[test]
fn chart_scales_follow_view() {
    let view = view_of(vec![
        ListingRecord::new("Honda", 18_000.0),
        ListingRecord::new("Toyota", 20_000.0),
        ListingRecord::new("Honda", 19_000.0),
    ]);
    let scales = ChartScales::compute(&view, 540.0, 350.0, 0.1).expect("scales");

    let domain: Vec<&str> = scales.band.domain().collect();
    assert_eq!(domain, vec!["Honda", "Toyota"]);
    assert_eq!(scales.value.domain(), (0.0, 20_000.0));
    assert_eq!(scales.height(0.0).expect("zero"), 350.0);
    assert_eq!(scales.height(20_000.0).expect("max"), 0.0);
    assert_eq!(scales.plot_height(), 350.0);
}

#[test]
fn chart_scales_for_empty_view_default_to_zero_domain() {
    let scales = ChartScales::compute(&FilteredView::default(), 540.0, 350.0, 0.1).expect("scales");
    assert!(scales.band.is_empty());
    assert_eq!(scales.value.domain(), (0.0, 0.0));
    assert_eq!(scales.height(0.0).expect("zero"), 350.0);
}

#[test]
fn chart_scales_are_deterministic() {
    let view = view_of(vec![
        ListingRecord::new("Kia", 9_000.0),
        ListingRecord::new("Audi", 41_000.0),
    ]);
    let first = ChartScales::compute(&view, 540.0, 350.0, 0.1).expect("first");
    let second = ChartScales::compute(&view, 540.0, 350.0, 0.1).expect("second");
    assert_eq!(first, second);
}

#[test]
fn chart_scales_reject_invalid_plot() {
    let view = FilteredView::default();
    assert!(ChartScales::compute(&view, 0.0, 350.0, 0.1).is_err());
    assert!(ChartScales::compute(&view, 540.0, f64::NAN, 0.1).is_err());
}
