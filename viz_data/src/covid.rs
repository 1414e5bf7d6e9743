//! Synthetic COVID-19 case/death series
//!
//! Daily counts are built from a base level, a linear trend, a yearly
//! sinusoid, three Gaussian wave bumps and i.i.d. noise, floored at zero.
//! Deaths follow the cases at a fixed rate with their own noise term.

use crate::{DataError, Result};
use chrono::NaiveDate;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// A Gaussian bump added on top of the base epidemic curve
#[derive(Debug, Clone, Copy)]
pub struct Wave {
    /// Center of the bump, in days from the series start
    pub center: f64,
    /// Peak height, in daily cases
    pub amplitude: f64,
    /// Spread of the bump, in days
    pub sigma: f64,
}

impl Wave {
    fn value_at(&self, day: f64) -> f64 {
        let offset = day - self.center;
        self.amplitude * (-(offset * offset) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

/// Parameters for the synthetic case/death series
#[derive(Debug, Clone)]
pub struct CovidSeriesParams {
    /// First day of the series (inclusive)
    pub start: NaiveDate,
    /// Last day of the series (inclusive)
    pub end: NaiveDate,
    /// Baseline daily cases before trend and seasonality
    pub base_cases: f64,
    /// Linear trend height over the whole range
    pub trend_peak: f64,
    /// Amplitude of the yearly sinusoid
    pub seasonal_amplitude: f64,
    /// Standard deviation of the case noise term
    pub case_noise_sd: f64,
    /// Epidemic waves layered on the base curve
    pub waves: Vec<Wave>,
    /// Deaths as a fraction of same-day cases
    pub death_rate: f64,
    /// Standard deviation of the death noise term
    pub death_noise_sd: f64,
    /// RNG seed
    pub seed: u64,
}

impl Default for CovidSeriesParams {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 8, 31).unwrap(),
            base_cases: 1000.0,
            trend_peak: 2000.0,
            seasonal_amplitude: 500.0,
            case_noise_sd: 200.0,
            waves: vec![
                Wave { center: 100.0, amplitude: 3000.0, sigma: 50.0 },
                Wave { center: 400.0, amplitude: 4000.0, sigma: 80.0 },
                Wave { center: 700.0, amplitude: 2500.0, sigma: 60.0 },
            ],
            death_rate: 0.02,
            death_noise_sd: 10.0,
            seed: 42,
        }
    }
}

/// Daily case/death series backed by a polars DataFrame
#[derive(Debug, Clone)]
pub struct CaseSeries {
    df: DataFrame,
}

impl CaseSeries {
    /// Build a series from parallel date/case/death vectors
    pub fn new(dates: Vec<NaiveDate>, cases: Vec<i64>, deaths: Vec<i64>) -> Result<Self> {
        if dates.len() != cases.len() || dates.len() != deaths.len() {
            return Err(DataError::InvalidInput(format!(
                "Column lengths differ: {} dates, {} cases, {} deaths",
                dates.len(),
                cases.len(),
                deaths.len()
            )));
        }
        if dates.is_empty() {
            return Err(DataError::InvalidInput(
                "Cannot build an empty case series".to_string(),
            ));
        }

        let date_series = Series::new(
            "date",
            dates
                .iter()
                .map(|d| {
                    d.and_hms_opt(0, 0, 0)
                        .map(|dt| dt.and_utc().timestamp_millis())
                        .unwrap_or_default()
                })
                .collect::<Vec<i64>>(),
        );
        let case_series = Series::new("cases", cases);
        let death_series = Series::new("deaths", deaths);

        let df = DataFrame::new(vec![date_series, case_series, death_series])?;

        Ok(Self { df })
    }

    /// Get the backing DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Get the dates column
    pub fn dates(&self) -> Vec<NaiveDate> {
        let col = match self.df.column("date") {
            Ok(col) => col,
            Err(_) => return Vec::new(),
        };
        match col.i64() {
            Ok(chunked) => chunked
                .into_iter()
                .flatten()
                .filter_map(|ms| chrono::DateTime::from_timestamp_millis(ms))
                .map(|dt| dt.date_naive())
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Get the daily case counts as f64 values
    pub fn cases(&self) -> Vec<f64> {
        self.column_as_f64("cases")
    }

    /// Get the daily death counts as f64 values
    pub fn deaths(&self) -> Vec<f64> {
        self.column_as_f64("deaths")
    }

    fn column_as_f64(&self, name: &str) -> Vec<f64> {
        let col = match self.df.column(name) {
            Ok(col) => col,
            Err(_) => return Vec::new(),
        };
        match col.dtype() {
            DataType::Int64 => col
                .i64()
                .map(|c| c.into_iter().flatten().map(|v| v as f64).collect())
                .unwrap_or_default(),
            DataType::Float64 => col
                .f64()
                .map(|c| c.into_iter().flatten().collect())
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    /// Check if the series is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Get the number of daily records
    pub fn len(&self) -> usize {
        self.df.height()
    }
}

/// Generate the synthetic case/death series
///
/// The base level, trend, seasonal and noise components are summed and
/// floored at zero, then the wave bumps are layered on top. Deaths are
/// derived from the waved case counts.
pub fn generate_case_series(params: &CovidSeriesParams) -> Result<CaseSeries> {
    if params.end < params.start {
        return Err(DataError::InvalidInput(format!(
            "Series end {} precedes start {}",
            params.end, params.start
        )));
    }

    let n = (params.end - params.start).num_days() as usize + 1;
    let dates: Vec<NaiveDate> = params.start.iter_days().take(n).collect();

    let mut rng = StdRng::seed_from_u64(params.seed);
    let case_noise = Normal::new(0.0, params.case_noise_sd)
        .map_err(|e| DataError::InvalidInput(format!("Bad case noise sd: {}", e)))?;
    let death_noise = Normal::new(0.0, params.death_noise_sd)
        .map_err(|e| DataError::InvalidInput(format!("Bad death noise sd: {}", e)))?;

    let mut cases = Vec::with_capacity(n);
    for t in 0..n {
        let day = t as f64;
        let trend = if n > 1 {
            params.trend_peak * day / (n as f64 - 1.0)
        } else {
            0.0
        };
        let seasonal = params.seasonal_amplitude
            * (2.0 * std::f64::consts::PI * day / 365.25).sin();
        let noise = case_noise.sample(&mut rng);

        let base = (params.base_cases + trend + seasonal + noise).max(0.0);
        let waves: f64 = params.waves.iter().map(|w| w.value_at(day)).sum();
        cases.push(base + waves);
    }

    let mut case_counts = Vec::with_capacity(n);
    let mut death_counts = Vec::with_capacity(n);
    for &c in &cases {
        case_counts.push(c as i64);
    }
    for &c in &cases {
        let d = (c * params.death_rate + death_noise.sample(&mut rng)).max(0.0);
        death_counts.push(d as i64);
    }

    CaseSeries::new(dates, case_counts, death_counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_peaks_at_center() {
        let wave = Wave { center: 100.0, amplitude: 3000.0, sigma: 50.0 };
        assert!(wave.value_at(100.0) > wave.value_at(90.0));
        assert!(wave.value_at(100.0) > wave.value_at(110.0));
        assert!((wave.value_at(100.0) - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn mismatched_columns_rejected() {
        let dates = vec![NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()];
        let result = CaseSeries::new(dates, vec![1, 2], vec![0]);
        assert!(result.is_err());
    }
}
