//! Descriptive statistics for numeric samples

use crate::{Result, StatsError};
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Distribution, Max, Min, OrderStatistics};

/// Summary statistics of a numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub mean: f64,
    pub median: f64,
    pub std_dev: f64,
    pub variance: f64,
    pub min: f64,
    pub max: f64,
    /// 25th percentile
    pub q1: f64,
    /// 75th percentile
    pub q3: f64,
}

impl SummaryStats {
    /// Compute summary statistics over a sample
    pub fn from_sample(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(StatsError::InsufficientData(format!(
                "Need at least 2 observations for summary statistics, got {}",
                values.len()
            )));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(StatsError::ValidationError(
                "Sample contains non-finite values".to_string(),
            ));
        }

        let mut data = Data::new(values.to_vec());

        let mean = data
            .mean()
            .ok_or_else(|| StatsError::EstimationError("Mean is undefined".to_string()))?;
        let variance = data
            .variance()
            .ok_or_else(|| StatsError::EstimationError("Variance is undefined".to_string()))?;
        let std_dev = data
            .std_dev()
            .ok_or_else(|| StatsError::EstimationError("Std dev is undefined".to_string()))?;

        let min = data.min();
        let max = data.max();
        let median = data.median();
        let q1 = data.percentile(25);
        let q3 = data.percentile(75);

        Ok(Self {
            mean,
            median,
            std_dev,
            variance,
            min,
            max,
            q1,
            q3,
        })
    }

    /// The seven charted statistics, labeled, in display order
    ///
    /// Variance is part of the summary but not charted.
    pub fn chart_entries(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("Mean", self.mean),
            ("Median", self.median),
            ("Std Dev", self.std_dev),
            ("Min", self.min),
            ("Max", self.max),
            ("Q1", self.q1),
            ("Q3", self.q3),
        ]
    }

    /// Serialize the summary to a JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| StatsError::ValidationError(format!("Serialization failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn summary_of_known_sample() {
        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = SummaryStats::from_sample(&values).unwrap();

        assert_approx_eq!(stats.mean, 3.0);
        assert_approx_eq!(stats.median, 3.0);
        assert_approx_eq!(stats.min, 1.0);
        assert_approx_eq!(stats.max, 5.0);
        assert!(stats.q1 < stats.median);
        assert!(stats.q3 > stats.median);
    }

    #[test]
    fn quartiles_are_ordered() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let stats = SummaryStats::from_sample(&values).unwrap();

        assert!(stats.min <= stats.q1);
        assert!(stats.q1 < stats.median);
        assert!(stats.median < stats.q3);
        assert!(stats.q3 <= stats.max);
    }

    #[test]
    fn rejects_tiny_or_bad_samples() {
        assert!(SummaryStats::from_sample(&[]).is_err());
        assert!(SummaryStats::from_sample(&[1.0]).is_err());
        assert!(SummaryStats::from_sample(&[1.0, f64::NAN, 2.0]).is_err());
    }

    #[test]
    fn chart_entries_exclude_variance() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let stats = SummaryStats::from_sample(&values).unwrap();
        let entries = stats.chart_entries();

        assert_eq!(entries.len(), 7);
        assert!(entries.iter().all(|(label, _)| *label != "Variance"));
    }
}
