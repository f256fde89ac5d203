//! Phone specification ingestion.
//!
//! Reads a CSV source whose first line is a header, turns every data row
//! into a normalized [`PhoneRecord`] and optionally drops duplicate records.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use phonespec_ingest::{LoadOptions, load_records};
//!
//! let records = load_records(Path::new("cells.csv"), &LoadOptions::default())?;
//! println!("{} phones", records.len());
//! ```
//!
//! [`PhoneRecord`]: phonespec_model::PhoneRecord

mod dedupe;
mod error;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === Loading ===
pub use dedupe::dedupe_records;
pub use reader::{LoadOptions, load_records, read_records};
