//! Error types for the visualization driver

use thiserror::Error;

/// Errors that can occur while generating the portfolio images
#[derive(Error, Debug)]
pub enum DriverError {
    /// Error from dataset generation
    #[error("Data error: {0}")]
    Data(#[from] viz_data::DataError),

    /// Error from statistical calculations or model fitting
    #[error("Statistics error: {0}")]
    Stats(#[from] viz_stats::StatsError),

    /// Error from chart or screenshot rendering
    #[error("Render error: {0}")]
    Render(#[from] viz_render::RenderError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external statistics runtime exited with a failure status
    #[error("External script runner `{program}` exited with status {code}: {stderr}")]
    ExternalScript {
        program: String,
        code: i32,
        stderr: String,
    },
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, DriverError>;
