//! CSV reading into normalized records.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord};
use phonespec_model::PhoneRecord;
use phonespec_normalization::normalize_row;
use tracing::{debug, info};

use crate::dedupe::dedupe_records;
use crate::error::{IngestError, Result};

/// Label used in errors for sources that are not files.
const READER_SOURCE: &str = "<reader>";

/// Options controlling how a source becomes a record collection.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Drop records whose rendered text repeats an earlier record.
    pub dedupe: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { dedupe: true }
    }
}

impl LoadOptions {
    /// Enable or disable duplicate removal.
    #[must_use]
    pub fn with_dedupe(mut self, enable: bool) -> Self {
        self.dedupe = enable;
        self
    }
}

fn open_source(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::SourceRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

/// Rebuilds fields from comma-separated pieces so that commas inside double
/// quotes stay in their field, even when whitespace precedes the opening quote.
fn rejoin_quoted(pieces: &StringRecord) -> Vec<String> {
    let mut fields = Vec::with_capacity(pieces.len());
    let mut open: Option<String> = None;
    for piece in pieces {
        let field = match open.take() {
            Some(mut pending) => {
                pending.push(',');
                pending.push_str(piece);
                pending
            }
            None if piece.trim_start().starts_with('"') => piece.to_string(),
            None => {
                fields.push(piece.to_string());
                continue;
            }
        };
        if field.matches('"').count() % 2 == 1 {
            open = Some(field);
        } else {
            fields.push(unquote(&field));
        }
    }
    // An unterminated quote runs to the end of the line.
    if let Some(pending) = open {
        fields.push(unquote(&pending));
    }
    fields
}

fn unquote(field: &str) -> String {
    let trimmed = field.trim();
    let inner = match trimmed.strip_prefix('"') {
        Some(rest) => rest.strip_suffix('"').unwrap_or(rest),
        None => trimmed,
    };
    inner.replace("\"\"", "\"")
}

fn collect_records<R: Read>(
    reader: R,
    source: &Path,
    options: &LoadOptions,
) -> Result<Vec<PhoneRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);
    let mut records = Vec::new();
    let mut blank_rows = 0usize;
    for row in reader.records() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            source: e,
        })?;
        let fields = rejoin_quoted(&row);
        if fields.iter().all(|value| value.trim().is_empty()) {
            blank_rows += 1;
            continue;
        }
        records.push(normalize_row(&fields));
    }
    let row_count = records.len();
    if options.dedupe {
        records = dedupe_records(records);
    }
    debug!(
        source = %source.display(),
        rows = row_count,
        blank_rows,
        duplicates = row_count - records.len(),
        "normalized rows"
    );
    Ok(records)
}

/// Loads every data row of a CSV file, skipping its header line.
///
/// # Errors
///
/// Returns [`IngestError::SourceNotFound`] when `path` does not exist, and
/// other variants when the file cannot be opened or decoded.
pub fn load_records(path: &Path, options: &LoadOptions) -> Result<Vec<PhoneRecord>> {
    let file = open_source(path)?;
    let records = collect_records(file, path, options)?;
    info!(
        path = %path.display(),
        records = records.len(),
        "loaded phone records"
    );
    Ok(records)
}

/// Reads records from any CSV stream whose first line is a header.
pub fn read_records<R: Read>(reader: R, options: &LoadOptions) -> Result<Vec<PhoneRecord>> {
    collect_records(reader, &PathBuf::from(READER_SOURCE), options)
}
