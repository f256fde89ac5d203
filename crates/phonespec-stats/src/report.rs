use phonespec_model::PhoneRecord;
use serde::Serialize;
use tracing::debug;

use crate::frequency::mode_status;
use crate::queries::{
    ManufacturerWeight, ReleaseMismatch, YearCount, announce_release_mismatches,
    busiest_announce_year, heaviest_manufacturer, single_sensor_count,
};
use crate::weight::WeightSummary;

/// Everything the report view shows, gathered from one collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetReport {
    pub total_records: usize,
    /// Leading records shown as a sample.
    pub preview: Vec<PhoneRecord>,
    pub weight: Option<WeightSummary>,
    pub mode_status: Option<String>,
    pub heaviest_manufacturer: Option<ManufacturerWeight>,
    pub release_mismatches: Vec<ReleaseMismatch>,
    pub single_sensor_count: usize,
    pub busiest_year: Option<YearCount>,
}

impl DatasetReport {
    pub fn build(records: &[PhoneRecord], preview: usize) -> Self {
        let report = Self {
            total_records: records.len(),
            preview: records.iter().take(preview).cloned().collect(),
            weight: WeightSummary::compute(records),
            mode_status: mode_status(records),
            heaviest_manufacturer: heaviest_manufacturer(records),
            release_mismatches: announce_release_mismatches(records),
            single_sensor_count: single_sensor_count(records),
            busiest_year: busiest_announce_year(records),
        };
        debug!(
            total_records = report.total_records,
            mismatches = report.release_mismatches.len(),
            "built dataset report"
        );
        report
    }
}
