//! # Viz Data
//!
//! Synthetic dataset generation for the portfolio visualization pipeline.
//! Every generator is deterministic given its seed; nothing is read from or
//! persisted to disk.

use thiserror::Error;

pub mod covid;
pub mod econ;
pub mod sample;

pub use covid::{generate_case_series, CaseSeries, CovidSeriesParams};
pub use econ::{generate_econ_dataset, EconDataset, EconParams};
pub use sample::normal_sample;

/// Errors that can occur while generating or accessing synthetic datasets
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Frame error: {0}")]
    FrameError(String),
}

impl From<polars::prelude::PolarsError> for DataError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        DataError::FrameError(err.to_string())
    }
}

/// Result type for dataset generation
pub type Result<T> = std::result::Result<T, DataError>;
