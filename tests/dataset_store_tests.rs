use std::fs;

use listing_charts::ChartError;
use listing_charts::api::{
    DatasetSource, DatasetStore, JsonFileSource, JsonTextSource, LoadPhase, LoadStatus,
    RecordsSource, parse_listings_json,
};
use listing_charts::core::{ListingRecord, PricePolicy, RawListing, sanitize_listings};
use serde_json::json;

#[test]
fn store_starts_pending_and_empty() {
    let store = DatasetStore::default();
    assert_eq!(store.phase(), LoadPhase::Pending);
    assert!(store.records().is_empty());
    assert_eq!(store.policy(), PricePolicy::Exclude);
}

#[test]
fn payload_accepts_service_and_plain_field_names() {
    let raw = parse_listings_json(
        r#"[
            {"MakerName": "Honda", "price": 18000, "model": "Civic"},
            {"manufacturer": "Kia", "price": "9500.25"}
        ]"#,
    )
    .expect("payload");
    let sanitized = sanitize_listings(raw, PricePolicy::Exclude);

    assert!(sanitized.excluded.is_empty());
    assert_eq!(sanitized.records[0].manufacturer, "Honda");
    assert_eq!(sanitized.records[0].detail("model"), Some(&json!("Civic")));
    assert_eq!(sanitized.records[1].manufacturer, "Kia");
    assert_eq!(sanitized.records[1].price, 9_500.25);
}

#[test]
fn exclude_policy_drops_unusable_prices() {
    let raw = parse_listings_json(
        r#"[
            {"MakerName": "Honda", "price": 18000},
            {"MakerName": "Honda", "price": null},
            {"MakerName": "Honda"},
            {"MakerName": "Honda", "price": "n/a"},
            {"MakerName": "Honda", "price": -5},
            {"MakerName": "Honda", "price": true}
        ]"#,
    )
    .expect("payload");
    let mut store = DatasetStore::new(PricePolicy::Exclude);

    let phase = store.complete_load(Ok(raw));
    assert_eq!(phase, LoadPhase::Loaded);
    assert_eq!(store.records().len(), 1);
    assert!(matches!(
        store.status(),
        LoadStatus::Loaded { records: 1, excluded: 5, .. }
    ));
}

#[test]
fn coerce_policy_charts_unusable_prices_at_zero() {
    let raw = vec![
        RawListing::new("Ford", json!(12_000)),
        RawListing::new("Ford", json!("abc")),
        RawListing::new("Ford", json!(null)),
    ];
    let sanitized = sanitize_listings(raw, PricePolicy::CoerceToZero);

    let prices: Vec<f64> = sanitized.records.iter().map(|r| r.price).collect();
    assert_eq!(prices, vec![12_000.0, 0.0, 0.0]);
    assert!(sanitized.excluded.is_empty());
}

#[test]
fn non_string_manufacturer_drops_only_that_listing() {
    let mut store = DatasetStore::default();
    let phase = store.load_from(&mut JsonTextSource::new(
        r#"[{"MakerName": "Toyota", "price": 20000}, {"MakerName": 123, "price": 5}]"#,
    ));

    assert_eq!(phase, LoadPhase::Loaded);
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].manufacturer, "Toyota");
    assert!(matches!(
        store.status(),
        LoadStatus::Loaded { records: 1, excluded: 1, .. }
    ));
}

#[test]
fn listing_without_manufacturer_is_always_dropped() {
    let raw = parse_listings_json(r#"[{"price": 100}, {"MakerName": "Audi", "price": 1}]"#)
        .expect("payload");

    for policy in [PricePolicy::Exclude, PricePolicy::CoerceToZero] {
        let sanitized = sanitize_listings(raw.clone(), policy);
        assert_eq!(sanitized.records.len(), 1);
        assert_eq!(sanitized.excluded.len(), 1);
        assert_eq!(sanitized.excluded[0].0, 0);
    }
}

#[test]
fn failed_load_clears_previous_records() {
    let mut store = DatasetStore::default();
    store.load_from(&mut RecordsSource::new(vec![ListingRecord::new("Audi", 1.0)]));
    assert_eq!(store.records().len(), 1);

    let phase = store.complete_load(Err(ChartError::DataLoad("timeout".to_owned())));
    assert_eq!(phase, LoadPhase::Failed);
    assert!(store.records().is_empty());
    assert!(matches!(store.status(), LoadStatus::Failed { reason, .. } if reason.contains("timeout")));
}

#[test]
fn records_source_revalidates_prices() {
    let mut source = RecordsSource::new(vec![
        ListingRecord::new("Audi", 41_000.0),
        ListingRecord::new("Audi", f64::NAN),
        ListingRecord::new("Audi", -1.0),
    ]);
    let mut store = DatasetStore::default();

    assert_eq!(store.load_from(&mut source), LoadPhase::Loaded);
    assert_eq!(store.records().len(), 1);
    assert_eq!(store.records()[0].price, 41_000.0);
}

#[test]
fn file_source_reads_listing_array() {
    let path = std::env::temp_dir().join(format!(
        "listing-charts-dataset-{}.json",
        std::process::id()
    ));
    fs::write(
        &path,
        r#"[{"MakerName": "Toyota", "price": 20000}, {"MakerName": "Honda", "price": 18000}]"#,
    )
    .expect("write dataset");

    let mut source = JsonFileSource::new(&path);
    assert!(source.describe().contains("listing-charts-dataset"));
    let raw = source.fetch().expect("fetch");
    assert_eq!(raw.len(), 2);

    fs::remove_file(&path).expect("cleanup");
}

#[test]
fn missing_file_is_a_load_error() {
    let mut source = JsonFileSource::new("/definitely/not/here/listings.json");
    let err = source.fetch().expect_err("missing file");
    assert!(matches!(err, ChartError::DataLoad(_)));

    let mut store = DatasetStore::default();
    assert_eq!(store.load_from(&mut source), LoadPhase::Failed);
}

#[test]
fn non_array_payload_is_rejected() {
    let err = parse_listings_json(r#"{"MakerName": "Honda"}"#).expect_err("object payload");
    assert!(matches!(err, ChartError::DataLoad(_)));
}
