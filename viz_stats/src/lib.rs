//! # Viz Stats
//!
//! Statistical building blocks for the portfolio visualization pipeline:
//!
//! - Descriptive summaries of numeric samples
//! - Pearson correlation and simple linear regression
//! - ARIMA forecasting fit by conditional least squares
//!
//! All functions operate on plain `&[f64]` slices so the crate carries no
//! dataframe dependency.

use thiserror::Error;

pub mod describe;
pub mod models;
pub mod regression;
pub mod utils;

pub use describe::SummaryStats;
pub use models::arima::{Arima, TrainedArima};
pub use models::{ForecastModel, ForecastResult, TrainedForecastModel};
pub use regression::{fit_linear, pearson_correlation, LinearFit};
pub use utils::train_test_split;

/// Errors that can occur in statistical calculations
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Estimation error: {0}")]
    EstimationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Result type for statistical operations
pub type Result<T> = std::result::Result<T, StatsError>;
