//! Whole-record mutations on a collection.

use phonespec_model::PhoneRecord;
use tracing::debug;

/// Appends a record to the collection.
pub fn insert(records: &mut Vec<PhoneRecord>, record: PhoneRecord) {
    records.push(record);
}

/// Removes every record whose model matches `model` ignoring case.
///
/// Returns `true` when at least one record was removed.
pub fn delete_by_model(records: &mut Vec<PhoneRecord>, model: &str) -> bool {
    let before = records.len();
    records.retain(|record| !record.model_matches(model));
    let removed = before - records.len();
    debug!(model, removed, "delete by model");
    removed > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(model: &str) -> PhoneRecord {
        PhoneRecord {
            model: Some(model.to_string()),
            ..PhoneRecord::default()
        }
    }

    #[test]
    fn insert_appends() {
        let mut records = Vec::new();
        insert(&mut records, named("ModelX"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].model.as_deref(), Some("ModelX"));
    }

    #[test]
    fn delete_removes_all_matches() {
        let mut records = vec![named("Beta"), named("Alpha"), named("BETA")];
        assert!(delete_by_model(&mut records, "beta"));
        assert_eq!(records, vec![named("Alpha")]);
    }

    #[test]
    fn delete_without_match_leaves_collection() {
        let mut records = vec![named("Alpha"), PhoneRecord::default()];
        let before = records.clone();
        assert!(!delete_by_model(&mut records, "Gamma"));
        assert_eq!(records, before);
    }
}
