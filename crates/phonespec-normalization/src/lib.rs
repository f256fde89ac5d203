//! Normalization of raw phone specification cells.
//!
//! Every function here is total: malformed input yields `None` rather than
//! an error, so a row of any shape always produces a [`PhoneRecord`].
//!
//! [`PhoneRecord`]: phonespec_model::PhoneRecord

pub mod fields;
pub mod record;

pub use fields::{
    clean_sensor, clean_sim, clean_text, extract_platform_name, extract_release_year,
    extract_size_inches, extract_weight_grams, extract_year,
};
pub use record::{normalize_row, release_year};
