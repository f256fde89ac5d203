//! Body weight statistics.
//!
//! Records without a weight are skipped; every statistic is `None` when no
//! record has a weight.

use phonespec_model::PhoneRecord;
use serde::Serialize;

fn weights(records: &[PhoneRecord]) -> Vec<f64> {
    records.iter().filter_map(|record| record.body_weight).collect()
}

fn mean_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

fn median_of(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let count = values.len();
    let median = if count % 2 == 0 {
        (values[count / 2 - 1] + values[count / 2]) / 2.0
    } else {
        values[count / 2]
    };
    Some(median)
}

fn std_dev_of(values: &[f64]) -> Option<f64> {
    let mean = mean_of(values)?;
    let variance =
        values.iter().map(|value| (value - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Arithmetic mean of the known weights.
pub fn mean_weight(records: &[PhoneRecord]) -> Option<f64> {
    mean_of(&weights(records))
}

/// Median of the known weights; the mean of the two middle values for an even count.
pub fn median_weight(records: &[PhoneRecord]) -> Option<f64> {
    median_of(&mut weights(records))
}

/// Population standard deviation of the known weights.
pub fn std_dev_weight(records: &[PhoneRecord]) -> Option<f64> {
    std_dev_of(&weights(records))
}

/// All weight statistics computed in one pass over the collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightSummary {
    /// Number of records with a known weight.
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
}

impl WeightSummary {
    pub fn compute(records: &[PhoneRecord]) -> Option<Self> {
        let mut values = weights(records);
        let mean = mean_of(&values)?;
        let std_dev = std_dev_of(&values)?;
        let median = median_of(&mut values)?;
        Some(Self {
            count: values.len(),
            mean,
            median,
            std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighed(weights: &[Option<f64>]) -> Vec<PhoneRecord> {
        weights
            .iter()
            .map(|weight| PhoneRecord {
                body_weight: *weight,
                ..PhoneRecord::default()
            })
            .collect()
    }

    #[test]
    fn odd_count() {
        let records = weighed(&[Some(300.0), Some(100.0), Some(200.0)]);
        assert_eq!(mean_weight(&records), Some(200.0));
        assert_eq!(median_weight(&records), Some(200.0));
        let std_dev = std_dev_weight(&records).expect("std dev");
        assert!((std_dev - 81.65).abs() < 0.01);
    }

    #[test]
    fn even_count_median_averages_middle() {
        let records = weighed(&[Some(180.0), Some(220.0), None, Some(100.0), Some(400.0)]);
        assert_eq!(median_weight(&records), Some(200.0));
        assert_eq!(mean_weight(&records), Some(225.0));
    }

    #[test]
    fn missing_weights_give_none() {
        let records = weighed(&[None, None]);
        assert_eq!(mean_weight(&records), None);
        assert_eq!(median_weight(&records), None);
        assert_eq!(std_dev_weight(&records), None);
        assert_eq!(WeightSummary::compute(&records), None);
        assert_eq!(mean_weight(&[]), None);
    }

    #[test]
    fn single_weight_has_zero_spread() {
        let records = weighed(&[Some(150.0)]);
        assert_eq!(std_dev_weight(&records), Some(0.0));
    }

    #[test]
    fn summary_matches_individual_functions() {
        let records = weighed(&[Some(100.0), None, Some(200.0), Some(300.0)]);
        let summary = WeightSummary::compute(&records).expect("summary");
        assert_eq!(summary.count, 3);
        assert_eq!(Some(summary.mean), mean_weight(&records));
        assert_eq!(Some(summary.median), median_weight(&records));
        assert_eq!(Some(summary.std_dev), std_dev_weight(&records));
    }
}
