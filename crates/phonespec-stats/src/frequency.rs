//! Frequency and distinct-value queries.

use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use phonespec_model::{Column, PhoneRecord};
use tracing::debug;

/// Counts occurrences, keeping keys in first-seen order.
pub(crate) fn tally<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for value in values {
        match positions.get(&value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }
    counts
}

/// Picks the entry with the highest score; the earliest entry wins a tie.
pub(crate) fn first_max_by<T, F>(items: impl IntoIterator<Item = T>, mut score: F) -> Option<T>
where
    F: FnMut(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let value = score(&item);
        if best.as_ref().is_none_or(|(_, top)| value > *top) {
            best = Some((item, value));
        }
    }
    best.map(|(item, _)| item)
}

/// The most common launch status among records that have one.
pub fn mode_status(records: &[PhoneRecord]) -> Option<String> {
    let counts = tally(
        records
            .iter()
            .filter_map(|record| record.launch_status.as_deref()),
    );
    first_max_by(counts, |(_, count)| *count as f64).map(|(status, _)| status.to_string())
}

/// Distinct values of a column, including `None` when any record lacks a value.
pub fn unique_values(column: Column, records: &[PhoneRecord]) -> BTreeSet<Option<String>> {
    records
        .iter()
        .map(|record| column.value(record).map(str::to_string))
        .collect()
}

/// Distinct values for a column given by name.
///
/// An unrecognised column name yields an empty set.
pub fn unique_values_for(column: &str, records: &[PhoneRecord]) -> BTreeSet<Option<String>> {
    match Column::parse(column) {
        Some(column) => unique_values(column, records),
        None => {
            debug!(column, "no such column for unique values");
            BTreeSet::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tally_keeps_first_seen_order() {
        let counts = tally(["b", "a", "b", "c", "a", "b"]);
        assert_eq!(counts, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn first_max_prefers_earliest() {
        let winner = first_max_by([("x", 2), ("y", 3), ("z", 3)], |(_, n)| *n as f64);
        assert_eq!(winner, Some(("y", 3)));
        let empty: [(&str, i32); 0] = [];
        assert_eq!(first_max_by(empty, |(_, n)| *n as f64), None);
    }

    #[test]
    fn mode_tie_goes_to_first_seen() {
        let records: Vec<PhoneRecord> = ["Discontinued", "Available", "Available", "Discontinued"]
            .iter()
            .map(|status| PhoneRecord {
                launch_status: Some(status.to_string()),
                ..PhoneRecord::default()
            })
            .collect();
        assert_eq!(mode_status(&records).as_deref(), Some("Discontinued"));
    }

    #[test]
    fn unique_values_include_missing() {
        let records = vec![
            PhoneRecord {
                platform_os: Some("Android".to_string()),
                ..PhoneRecord::default()
            },
            PhoneRecord::default(),
        ];
        let values = unique_values(Column::PlatformOs, &records);
        assert_eq!(
            values,
            BTreeSet::from([None, Some("Android".to_string())])
        );
    }
}
