//! # Viz Render
//!
//! Renders the portfolio chart images and code screenshots to PNG files.
//!
//! Panel charts are drawn at 1600x900; code screenshots are rendered at
//! their native text extent and then resampled to exactly 1200x900.

use thiserror::Error;

pub mod bars;
pub mod code;
pub mod scatter;
pub mod timeseries;

pub use bars::render_stats_bars;
pub use code::{render_code_screenshot, CodeLanguage};
pub use scatter::render_scatter_regression;
pub use timeseries::render_case_panels;

/// Width of the 16:9 panel images
pub const PANEL_WIDTH: u32 = 1600;
/// Height of the 16:9 panel images
pub const PANEL_HEIGHT: u32 = 900;
/// Width of the 4:3 code screenshot images
pub const CODE_WIDTH: u32 = 1200;
/// Height of the 4:3 code screenshot images
pub const CODE_HEIGHT: u32 = 900;

/// Errors that can occur while rendering images
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Drawing error: {0}")]
    Backend(String),

    #[error("Highlighting error: {0}")]
    Highlight(String),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
