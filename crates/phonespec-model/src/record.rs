use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of positional source columns a record is built from.
pub const FIELD_COUNT: usize = 12;

/// One phone specification row after normalization.
///
/// Every attribute is independently optional: a blank, placeholder or
/// unparseable source cell leaves the attribute as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhoneRecord {
    /// Original equipment manufacturer (column 0).
    pub oem: Option<String>,
    /// Model name (column 1).
    pub model: Option<String>,
    /// Year the phone was announced (column 2).
    pub launch_announced: Option<i32>,
    /// Availability status, possibly embedding a release year (column 3).
    pub launch_status: Option<String>,
    /// Physical dimensions as written in the source (column 4).
    pub body_dimensions: Option<String>,
    /// Weight in grams (column 5).
    pub body_weight: Option<f64>,
    /// SIM type (column 6).
    pub body_sim: Option<String>,
    /// Screen technology (column 7).
    pub display_type: Option<String>,
    /// Screen diagonal in inches (column 8).
    pub display_size: Option<f64>,
    /// Screen resolution as written in the source (column 9).
    pub display_resolution: Option<String>,
    /// Comma-separated sensor list (column 10).
    pub feat_sensors: Option<String>,
    /// Operating system name without version details (column 11).
    pub platform_os: Option<String>,
}

impl PhoneRecord {
    /// Sensor entries split on commas, trimmed, with blank entries dropped.
    pub fn sensors(&self) -> impl Iterator<Item = &str> {
        self.feat_sensors
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
    }

    /// Case-insensitive model name comparison.
    pub fn model_matches(&self, name: &str) -> bool {
        self.model
            .as_deref()
            .is_some_and(|model| model.to_lowercase() == name.to_lowercase())
    }
}

fn text(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

struct Optional<T>(Option<T>);

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}"),
            None => f.write_str("-"),
        }
    }
}

struct Measured<T>(Option<T>, &'static str);

impl<T: fmt::Display> fmt::Display for Measured<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(value) => write!(f, "{value}{}", self.1),
            None => f.write_str("-"),
        }
    }
}

impl fmt::Display for PhoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OEM: {}, Model: {}, Launch announced: {}, Launch status: {}, \
             Body dimensions: {}, Body weight: {}, Body SIM: {}, Display type: {}, \
             Display size: {}, Display resolution: {}, Feature sensors: {}, Platform OS: {}",
            text(self.oem.as_deref()),
            text(self.model.as_deref()),
            Optional(self.launch_announced),
            text(self.launch_status.as_deref()),
            text(self.body_dimensions.as_deref()),
            Measured(self.body_weight, " g"),
            text(self.body_sim.as_deref()),
            text(self.display_type.as_deref()),
            Measured(self.display_size, "\""),
            text(self.display_resolution.as_deref()),
            text(self.feat_sensors.as_deref()),
            text(self.platform_os.as_deref()),
        )
    }
}
