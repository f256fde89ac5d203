use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::record::PhoneRecord;

/// Text columns that support distinct-value queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Manufacturer,
    Model,
    LaunchStatus,
    PlatformOs,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Manufacturer,
        Column::Model,
        Column::LaunchStatus,
        Column::PlatformOs,
    ];

    /// Looks a column up by name, accepting the common aliases.
    ///
    /// Matching ignores case, surrounding whitespace, `-` and `_`, so
    /// `oem`, `Launch-Status` and `platform_os` all resolve.
    pub fn parse(name: &str) -> Option<Self> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "oem" | "manufacturer" => Some(Column::Manufacturer),
            "model" => Some(Column::Model),
            "status" | "launchstatus" => Some(Column::LaunchStatus),
            "platform" | "platformos" | "os" => Some(Column::PlatformOs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Manufacturer => "oem",
            Column::Model => "model",
            Column::LaunchStatus => "launch_status",
            Column::PlatformOs => "platform_os",
        }
    }

    /// Human label used in rendered output.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Manufacturer => "OEM",
            Column::Model => "Model",
            Column::LaunchStatus => "Launch status",
            Column::PlatformOs => "Platform OS",
        }
    }

    /// Borrows this column's value from a record.
    pub fn value<'a>(&self, record: &'a PhoneRecord) -> Option<&'a str> {
        match self {
            Column::Manufacturer => record.oem.as_deref(),
            Column::Model => record.model.as_deref(),
            Column::LaunchStatus => record.launch_status.as_deref(),
            Column::PlatformOs => record.platform_os.as_deref(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::parse(s).ok_or_else(|| format!("Unknown column: {s}"))
    }
}
