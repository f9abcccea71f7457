// File: crates/pitch-feed/tests/payload.rs
// Purpose: Validate tolerant payload decoding, mock determinism, and CSV fixtures.

use std::time::Duration;

use serde_json::json;

use pitch_core::refresh::RefreshConfig;
use pitch_core::types::ViewBox;
use pitch_core::widget::{ChartWidget, DataSource};
use pitch_feed::{deliveries_from_value, zones_from_value, MockFeed};

#[test]
fn null_and_non_array_payloads_decode_to_empty() {
    assert!(deliveries_from_value(&json!(null)).is_empty());
    assert!(deliveries_from_value(&json!({"error": "boom"})).is_empty());
    assert!(deliveries_from_value(&json!("nope")).is_empty());
    assert!(zones_from_value(&json!(null)).is_empty());
    assert!(zones_from_value(&json!(42)).is_empty());
}

#[test]
fn missing_optional_fields_default() {
    let samples = deliveries_from_value(&json!([
        {"runs": 4, "type": "boundary"},
        {"runs": 2},
        {"type": "wicket"},
        {},
    ]));
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0].value, 4.0);
    assert_eq!(samples[1].value, 2.0);
    assert!(samples[1].category.is_none());
    assert_eq!(samples[2].value, 0.0);
    assert!(samples[2].marked);
    assert_eq!(samples[3].value, 0.0);
    assert!(!samples[3].marked);
}

#[test]
fn undecodable_entries_are_skipped() {
    let samples = deliveries_from_value(&json!([
        {"runs": 1},
        "not a record",
        17,
        {"runs": 6, "type": "Wicket"},
    ]));
    assert_eq!(samples.len(), 2);
    assert!(samples[1].marked, "wicket flag is case-insensitive");
}

#[test]
fn zone_records_map_backend_field_names() {
    let zones = zones_from_value(&json!([
        {"x_coordinate": 1.5, "y_coordinate": 2.5, "value": 65.0, "count": 9},
        {"x_coordinate": 0.0},
    ]));
    assert_eq!(zones.len(), 2);
    assert_eq!(zones[0].x, 1.5);
    assert_eq!(zones[0].y, 2.5);
    assert_eq!(zones[0].intensity, 65.0);
    assert_eq!(zones[0].count, 9);
    assert_eq!(zones[1].intensity, 0.0);
    assert_eq!(zones[1].count, 0);
}

#[test]
fn mock_feed_is_deterministic_per_seed() {
    let mut a = MockFeed::seeded(7, 6);
    let mut b = MockFeed::seeded(7, 6);
    assert_eq!(a.fetch().unwrap(), b.fetch().unwrap());
    assert_eq!(a.fetch().unwrap(), b.fetch().unwrap());

    let over = a.fetch().unwrap();
    assert_eq!(over.len(), 6);
    assert!(over.iter().all(|s| s.value.is_finite()));
}

#[test]
fn mock_feed_drives_a_widget_end_to_end() {
    let feed = MockFeed::seeded(42, 6);
    let view = ViewBox::try_new(300.0, 100.0, 8.0, 8.0).unwrap();
    let mut w = ChartWidget::mount(feed, 120, view, RefreshConfig::every(10)).unwrap();
    w.load();
    w.advance(Duration::from_secs(30));
    assert_eq!(w.series().len(), 4 * 6);
    assert_eq!(w.geometry().len(), 24);
    assert!(!w.has_error());
}

#[test]
fn csv_fixture_loads_and_skips_bad_rows() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("deliveries.csv");
    std::fs::write(
        &path,
        "runs,type\n0,dot\n4,boundary\n1,wicket\nnot-a-number,dot\n6,\n",
    )
    .unwrap();

    let samples = pitch_feed::fixture::load_deliveries_csv(&path).unwrap();
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[1].value, 4.0);
    assert!(samples[2].marked);
    assert_eq!(samples[3].value, 6.0);
    assert!(samples[3].category.is_none());

    assert!(pitch_feed::fixture::load_deliveries_csv(dir.join("missing.csv")).is_err());
}
