//! Synthetic economic dataset (CPI inflation vs unemployment)
//!
//! Both indicators share an eight-year cycle; unemployment runs roughly
//! counter-cyclical to inflation with a quarter-period phase shift.

use crate::{DataError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

/// Parameters for the synthetic economic dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconParams {
    /// Number of observations
    pub points: usize,
    /// First year (inclusive)
    pub start_year: f64,
    /// Last year (inclusive)
    pub end_year: f64,
    /// RNG seed
    pub seed: u64,
}

impl Default for EconParams {
    fn default() -> Self {
        Self {
            points: 200,
            start_year: 1990.0,
            end_year: 2023.0,
            seed: 42,
        }
    }
}

/// Synthetic CPI inflation and unemployment observations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconDataset {
    /// Observation years, evenly spaced over the range
    pub years: Vec<f64>,
    /// CPI inflation rate, percent, floored at 0
    pub cpi_inflation: Vec<f64>,
    /// Unemployment rate, percent, floored at 2
    pub unemployment: Vec<f64>,
}

impl EconDataset {
    /// Number of observations
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Check if the dataset is empty
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

const BASE_CPI: f64 = 2.5;
const CPI_TREND_PER_YEAR: f64 = 0.02;
const CPI_CYCLE_AMPLITUDE: f64 = 1.5;
const CPI_NOISE_SD: f64 = 0.8;

const BASE_UNEMPLOYMENT: f64 = 6.0;
const UNEMPLOYMENT_TREND_PER_YEAR: f64 = -0.01;
const UNEMPLOYMENT_CYCLE_AMPLITUDE: f64 = -1.2;
const UNEMPLOYMENT_NOISE_SD: f64 = 0.6;
const UNEMPLOYMENT_FLOOR: f64 = 2.0;

/// Business-cycle period shared by both indicators, in years
const CYCLE_PERIOD_YEARS: f64 = 8.0;

/// Generate the synthetic economic dataset
pub fn generate_econ_dataset(params: &EconParams) -> Result<EconDataset> {
    if params.points < 2 {
        return Err(DataError::InvalidInput(format!(
            "Need at least 2 observations, got {}",
            params.points
        )));
    }
    if params.end_year <= params.start_year {
        return Err(DataError::InvalidInput(format!(
            "Year range [{}, {}] is empty",
            params.start_year, params.end_year
        )));
    }

    let n = params.points;
    let span = params.end_year - params.start_year;
    let years: Vec<f64> = (0..n)
        .map(|i| params.start_year + span * i as f64 / (n as f64 - 1.0))
        .collect();

    let mut rng = StdRng::seed_from_u64(params.seed);
    let cpi_noise = Normal::new(0.0, CPI_NOISE_SD)
        .map_err(|e| DataError::InvalidInput(e.to_string()))?;
    let unemployment_noise = Normal::new(0.0, UNEMPLOYMENT_NOISE_SD)
        .map_err(|e| DataError::InvalidInput(e.to_string()))?;

    let two_pi = 2.0 * std::f64::consts::PI;

    let cpi_inflation: Vec<f64> = years
        .iter()
        .map(|year| {
            let elapsed = year - params.start_year;
            let trend = CPI_TREND_PER_YEAR * elapsed;
            let cycle = CPI_CYCLE_AMPLITUDE * (two_pi * elapsed / CYCLE_PERIOD_YEARS).sin();
            (BASE_CPI + trend + cycle + cpi_noise.sample(&mut rng)).max(0.0)
        })
        .collect();

    let unemployment: Vec<f64> = years
        .iter()
        .map(|year| {
            let elapsed = year - params.start_year;
            let trend = UNEMPLOYMENT_TREND_PER_YEAR * elapsed;
            let cycle = UNEMPLOYMENT_CYCLE_AMPLITUDE
                * (two_pi * elapsed / CYCLE_PERIOD_YEARS + std::f64::consts::FRAC_PI_4).sin();
            (BASE_UNEMPLOYMENT + trend + cycle + unemployment_noise.sample(&mut rng))
                .max(UNEMPLOYMENT_FLOOR)
        })
        .collect();

    Ok(EconDataset {
        years,
        cpi_inflation,
        unemployment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_ranges() {
        let params = EconParams { points: 1, ..EconParams::default() };
        assert!(generate_econ_dataset(&params).is_err());

        let params = EconParams {
            start_year: 2023.0,
            end_year: 1990.0,
            ..EconParams::default()
        };
        assert!(generate_econ_dataset(&params).is_err());
    }

    #[test]
    fn year_grid_spans_range() {
        let dataset = generate_econ_dataset(&EconParams::default()).unwrap();
        assert_eq!(dataset.years.first(), Some(&1990.0));
        assert_eq!(dataset.years.last(), Some(&2023.0));
    }
}
