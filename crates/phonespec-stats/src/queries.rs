//! Analytical questions answered from record fields and the basic aggregates.

use phonespec_model::PhoneRecord;
use phonespec_normalization::release_year;
use serde::Serialize;

use crate::frequency::{first_max_by, tally};

/// Years up to and including this one are left out of [`busiest_announce_year`].
const MODERN_ERA_AFTER: i32 = 1999;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManufacturerWeight {
    pub oem: String,
    pub average_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseMismatch {
    pub oem: Option<String>,
    pub model: Option<String>,
    pub announced: i32,
    pub released: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Manufacturer with the highest average body weight.
///
/// Only records with both a manufacturer and a weight take part. The
/// first manufacturer seen wins a tie.
pub fn heaviest_manufacturer(records: &[PhoneRecord]) -> Option<ManufacturerWeight> {
    let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
    for record in records {
        let (Some(oem), Some(weight)) = (record.oem.as_deref(), record.body_weight) else {
            continue;
        };
        match groups.iter_mut().find(|(name, _)| *name == oem) {
            Some((_, weights)) => weights.push(weight),
            None => groups.push((oem, vec![weight])),
        }
    }
    let averages = groups.into_iter().map(|(oem, weights)| ManufacturerWeight {
        oem: oem.to_string(),
        average_weight: weights.iter().sum::<f64>() / weights.len() as f64,
    });
    first_max_by(averages, |entry| entry.average_weight)
}

/// Records announced in one year but released in another.
///
/// Records missing either year are not counted.
pub fn announce_release_mismatches(records: &[PhoneRecord]) -> Vec<ReleaseMismatch> {
    records
        .iter()
        .filter_map(|record| {
            let announced = record.launch_announced?;
            let released = release_year(record)?;
            (announced != released).then(|| ReleaseMismatch {
                oem: record.oem.clone(),
                model: record.model.clone(),
                announced,
                released,
            })
        })
        .collect()
}

/// Number of records listing exactly one sensor.
pub fn single_sensor_count(records: &[PhoneRecord]) -> usize {
    records
        .iter()
        .filter(|record| record.sensors().count() == 1)
        .count()
}

/// Announcement year after 1999 with the most records.
pub fn busiest_announce_year(records: &[PhoneRecord]) -> Option<YearCount> {
    let counts = tally(
        records
            .iter()
            .filter_map(|record| record.launch_announced)
            .filter(|year| *year > MODERN_ERA_AFTER),
    );
    first_max_by(counts, |(_, count)| *count as f64)
        .map(|(year, count)| YearCount { year, count })
}
