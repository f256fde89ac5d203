//! Data model for normalized phone specification records.

pub mod column;
pub mod record;

pub use column::Column;
pub use record::{FIELD_COUNT, PhoneRecord};
