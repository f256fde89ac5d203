//! CLI library components for the phone specification reporter.

pub mod logging;
pub mod summary;
