//! Pearson correlation and simple linear regression

use crate::{Result, StatsError};
use serde::{Deserialize, Serialize};

/// Result of an ordinary least squares fit of y on x
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

impl LinearFit {
    /// Predicted y for a given x
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

fn check_paired(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(StatsError::ValidationError(format!(
            "Sample lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(StatsError::InsufficientData(format!(
            "Need at least 2 paired observations, got {}",
            x.len()
        )));
    }
    Ok(())
}

/// Pearson correlation coefficient between two samples
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y)?;

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut x_ss = 0.0;
    let mut y_ss = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        covariance += dx * dy;
        x_ss += dx * dx;
        y_ss += dy * dy;
    }

    let denominator = (x_ss * y_ss).sqrt();
    if denominator == 0.0 {
        return Err(StatsError::EstimationError(
            "Correlation is undefined for a constant sample".to_string(),
        ));
    }

    Ok(covariance / denominator)
}

/// Fit y = intercept + slope * x by ordinary least squares
pub fn fit_linear(x: &[f64], y: &[f64]) -> Result<LinearFit> {
    check_paired(x, y)?;

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut x_ss = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        covariance += (xi - x_mean) * (yi - y_mean);
        x_ss += (xi - x_mean) * (xi - x_mean);
    }

    if x_ss == 0.0 {
        return Err(StatsError::EstimationError(
            "Regression is undefined for a constant regressor".to_string(),
        ));
    }

    let slope = covariance / x_ss;
    let intercept = y_mean - slope * x_mean;

    // R² as 1 - SSR/SST, 1.0 when the target is constant
    let ss_total: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let ss_residual: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| {
            let predicted = intercept + slope * xi;
            (yi - predicted).powi(2)
        })
        .sum();

    let r_squared = if ss_total > 0.0 {
        1.0 - ss_residual / ss_total
    } else {
        1.0
    };

    Ok(LinearFit {
        slope,
        intercept,
        r_squared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn perfect_positive_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![2.0, 4.0, 6.0, 8.0];
        assert_approx_eq!(pearson_correlation(&x, &y).unwrap(), 1.0);
    }

    #[test]
    fn perfect_negative_correlation() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![8.0, 6.0, 4.0, 2.0];
        assert_approx_eq!(pearson_correlation(&x, &y).unwrap(), -1.0);
    }

    #[test]
    fn constant_sample_has_no_correlation() {
        let x = vec![3.0, 3.0, 3.0];
        let y = vec![1.0, 2.0, 3.0];
        assert!(pearson_correlation(&x, &y).is_err());
    }

    #[test]
    fn ols_recovers_planted_line() {
        let x: Vec<f64> = (0..50).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|xi| 3.0 + 0.5 * xi).collect();

        let fit = fit_linear(&x, &y).unwrap();
        assert_approx_eq!(fit.slope, 0.5, 1e-9);
        assert_approx_eq!(fit.intercept, 3.0, 1e-9);
        assert_approx_eq!(fit.r_squared, 1.0, 1e-9);
    }

    #[test]
    fn mismatched_lengths_rejected() {
        assert!(fit_linear(&[1.0, 2.0], &[1.0]).is_err());
        assert!(pearson_correlation(&[1.0], &[1.0]).is_err());
    }
}
