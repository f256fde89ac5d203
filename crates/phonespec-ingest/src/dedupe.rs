use std::collections::HashSet;

use phonespec_model::PhoneRecord;

/// Drops records whose rendered text repeats an earlier record.
///
/// First occurrences are kept in their original order. Two rows that
/// normalize to the same text count as duplicates even if their raw cells
/// differed.
pub fn dedupe_records(records: Vec<PhoneRecord>) -> Vec<PhoneRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.to_string()))
        .collect()
}
