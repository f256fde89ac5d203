//! Tests for aggregates over normalized records.

use std::collections::BTreeSet;

use phonespec_model::PhoneRecord;
use phonespec_normalization::normalize_row;
use phonespec_stats::{
    DatasetReport, delete_by_model, insert, mean_weight, median_weight, mode_status,
    std_dev_weight, unique_values_for,
};

fn cell(fields: [&str; 12]) -> PhoneRecord {
    normalize_row(&fields)
}

fn weighed(model: &str, weight: &str) -> PhoneRecord {
    cell([
        "OEM", model, "2021", "", "", weight, "", "", "", "", "", "",
    ])
}

fn with_status(oem: &str, model: &str, year: &str, status: &str, weight: &str) -> PhoneRecord {
    cell([
        oem, model, year, status, "-", weight, "-", "-", "-", "-", "-", "-",
    ])
}

#[test]
fn mean_of_two_weights() {
    let records = vec![
        with_status("OEM", "M1", "2020", "Available. Released 2020", "180 g"),
        with_status("OEM", "M2", "2020", "Available. Released 2020", "220 g"),
    ];
    assert_eq!(mean_weight(&records), Some(200.0));
}

#[test]
fn median_and_std_dev_of_three_weights() {
    let records = vec![
        weighed("A", "100 g"),
        weighed("B", "200 g"),
        weighed("C", "300 g"),
    ];
    assert_eq!(median_weight(&records), Some(200.0));
    assert_eq!(mean_weight(&records), Some(200.0));
    let std_dev = std_dev_weight(&records).expect("std dev");
    assert!((std_dev - 81.65).abs() < 0.01, "std dev was {std_dev}");
}

#[test]
fn mode_of_launch_status() {
    let records = vec![
        with_status("OEM", "A", "2020", "Available", "100 g"),
        with_status("OEM", "B", "2021", "Available", "110 g"),
        with_status("OEM", "C", "2022", "Discontinued", "120 g"),
    ];
    assert_eq!(mode_status(&records).as_deref(), Some("Available"));
    assert_eq!(mode_status(&[]), None);
}

#[test]
fn unique_manufacturers() {
    let records = vec![
        with_status("Samsung", "A", "2020", "Available", "100 g"),
        with_status("Apple", "B", "2021", "Discontinued", "110 g"),
        with_status("Samsung", "C", "2022", "Available", "120 g"),
    ];
    let expected: BTreeSet<Option<String>> =
        BTreeSet::from([Some("Samsung".to_string()), Some("Apple".to_string())]);
    assert_eq!(unique_values_for("oem", &records), expected);
    assert_eq!(unique_values_for("manufacturer", &records), expected);
    assert!(unique_values_for("bogus", &records).is_empty());
}

#[test]
fn insert_then_delete() {
    let mut records = Vec::new();
    insert(
        &mut records,
        with_status("OEM", "ModelX", "2023", "Available", "180 g"),
    );
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].model.as_deref(), Some("ModelX"));

    insert(
        &mut records,
        with_status("OEM", "Beta", "2023", "Available", "200 g"),
    );
    assert!(delete_by_model(&mut records, "beta"));
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].model.as_deref(), Some("ModelX"));

    assert!(!delete_by_model(&mut records, "beta"));
    assert_eq!(records.len(), 1);
}

#[test]
fn aggregates_are_repeatable() {
    let records = vec![
        with_status("Samsung", "A", "2020", "Available. Released 2021", "150 g"),
        with_status("Apple", "B", "2020", "Available. Released 2020", "175 g"),
        with_status("Samsung", "C", "2019", "Discontinued", "-"),
    ];
    let first = DatasetReport::build(&records, 2);
    let second = DatasetReport::build(&records, 2);
    assert_eq!(first, second);
    assert_eq!(first.total_records, 3);
    assert_eq!(first.preview.len(), 2);
    assert_eq!(first.release_mismatches.len(), 1);
    assert_eq!(
        first.heaviest_manufacturer.map(|entry| entry.oem).as_deref(),
        Some("Apple")
    );
    assert_eq!(first.busiest_year.map(|entry| entry.year), Some(2020));
}

#[test]
fn report_serializes_to_json() {
    let records = vec![weighed("A", "100 g"), weighed("B", "-")];
    let report = DatasetReport::build(&records, 5);
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["total_records"], 2);
    assert_eq!(json["weight"]["count"], 1);
    assert!(json["mode_status"].is_null());
    assert_eq!(json["preview"].as_array().map(Vec::len), Some(2));
}
