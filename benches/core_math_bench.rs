use listing_charts::ChartConfig;
use listing_charts::api::{DatasetStore, RecordsSource, RedrawController, build_chart_frames};
use listing_charts::core::{BandScale, FilterState, LinearScale, ListingRecord, nice_ticks};
use listing_charts::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const MAKERS: [&str; 6] = ["Toyota", "Honda", "Ford", "Kia", "Audi", "Mazda"];

fn listings(count: usize) -> Vec<ListingRecord> {
    (0..count)
        .map(|i| {
            let price = 8_000.0 + (i % 97) as f64 * 350.0;
            ListingRecord::new(MAKERS[i % MAKERS.len()], price)
        })
        .collect()
}

fn bench_price_scale_height(c: &mut Criterion) {
    let scale = LinearScale::for_prices(42_000.0, 350.0).expect("valid scale");

    c.bench_function("price_scale_height", |b| {
        b.iter(|| {
            let _ = scale.domain_to_pixel(black_box(18_999.5)).expect("to pixel");
        })
    });
}

fn bench_band_scale_build(c: &mut Criterion) {
    c.bench_function("band_scale_build_6", |b| {
        b.iter(|| {
            let scale = BandScale::new(black_box(MAKERS), 0.0, 540.0, 0.1).expect("band scale");
            let _ = scale.position("Mazda").expect("position");
        })
    });
}

fn bench_nice_ticks(c: &mut Criterion) {
    c.bench_function("nice_ticks_price_axis", |b| {
        b.iter(|| {
            let _ = nice_ticks(0.0, black_box(41_650.0), black_box(10));
        })
    });
}

fn bench_build_chart_frames_10k(c: &mut Criterion) {
    let dataset = listings(10_000);
    let filter = FilterState::from_selection(["Kia", "Mazda"]);
    let config = ChartConfig::default();

    c.bench_function("build_chart_frames_10k", |b| {
        b.iter(|| {
            let _ = build_chart_frames(black_box(&dataset), black_box(&filter), &config)
                .expect("frames should build");
        })
    });
}

fn bench_redraw_cycle(c: &mut Criterion) {
    let mut store = DatasetStore::default();
    store.load_from(&mut RecordsSource::new(listings(2_000)));
    let filter = FilterState::from_selection(MAKERS);
    let mut controller = RedrawController::new(
        ChartConfig::default(),
        NullRenderer::default(),
        NullRenderer::default(),
    )
    .expect("controller init");

    c.bench_function("redraw_cycle_2k", |b| {
        b.iter(|| {
            let _ = controller
                .on_state_change(black_box(&store), black_box(&filter))
                .expect("redraw should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_price_scale_height,
    bench_band_scale_build,
    bench_nice_ticks,
    bench_build_chart_frames_10k,
    bench_redraw_cycle
);
criterion_main!(benches);
