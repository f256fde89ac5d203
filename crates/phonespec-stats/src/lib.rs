//! Aggregates over collections of [`PhoneRecord`]s.
//!
//! All functions take the collection explicitly and hold no state between
//! calls; re-running an aggregate on an unchanged collection gives the same
//! answer. Only [`insert`] and [`delete_by_model`] mutate, and they add or
//! remove whole records.
//!
//! [`PhoneRecord`]: phonespec_model::PhoneRecord

pub mod collection;
pub mod frequency;
pub mod queries;
pub mod report;
pub mod weight;

pub use collection::{delete_by_model, insert};
pub use frequency::{mode_status, unique_values, unique_values_for};
pub use queries::{
    ManufacturerWeight, ReleaseMismatch, YearCount, announce_release_mismatches,
    busiest_announce_year, heaviest_manufacturer, single_sensor_count,
};
pub use report::DatasetReport;
pub use weight::{WeightSummary, mean_weight, median_weight, std_dev_weight};
