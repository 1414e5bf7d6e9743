//! # Portfolio Viz
//!
//! Driver for the portfolio visualization generator. Produces six static
//! images for a portfolio website:
//!
//! 1. `covid_timeseries.png` - synthetic case/death series with an ARIMA
//!    forecast overlay (1600x900)
//! 2. `covid_code.png` - highlighted Python analysis source (1200x900)
//! 3. `econ_scatter.png` - CPI inflation vs unemployment scatter with a
//!    regression line (1600x900)
//! 4. `econ_code.png` - the R analysis source as a code image (1200x900)
//! 5. `java_stats.png` - descriptive statistics bar chart (1600x900)
//! 6. `java_code.png` - highlighted Java analysis source (1200x900)
//!
//! The economic pair is produced by `Rscript` when it is on PATH and by a
//! native renderer otherwise; a failure there is logged and the remaining
//! images are still generated. Every other failure aborts the run.

pub mod econ;
pub mod error;
pub mod pipeline;

pub use error::{DriverError, Result};
pub use pipeline::run;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
