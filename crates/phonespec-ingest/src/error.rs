//! Error types for phone record ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading records.
///
/// Cell contents never produce errors; only the source itself can fail.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The input source does not exist.
    #[error("source not found: {path}")]
    SourceNotFound { path: PathBuf },

    /// The input source exists but could not be opened.
    #[error("failed to read source {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV stream could not be decoded (I/O failure or invalid UTF-8).
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Returns true when the failure is a missing source.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IngestError::SourceNotFound { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
