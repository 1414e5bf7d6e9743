//! Economic regression images via a pluggable renderer
//!
//! The economic step produces two artifacts: a scatter plot with a fitted
//! regression line and a code screenshot of the analysis script. Both can
//! come from an R interpreter; that boundary sits behind the
//! [`EconRenderer`] trait so the step works with or without `Rscript` on
//! the machine.

use crate::error::{DriverError, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use viz_data::econ::{generate_econ_dataset, EconParams};
use viz_render::scatter::ScatterLabels;
use viz_render::{render_code_screenshot, render_scatter_regression, CodeLanguage};
use viz_stats::{fit_linear, pearson_correlation};

/// The embedded R analysis source
pub const R_SOURCE: &str = include_str!("../assets/econ_analysis.R");

/// Default scatter plot filename
pub const ECON_SCATTER_PNG: &str = "econ_scatter.png";
/// Default code screenshot filename
pub const ECON_CODE_PNG: &str = "econ_code.png";
/// Filename the R source is written to before execution
pub const ECON_SCRIPT_FILE: &str = "econ_analysis.R";

/// A renderer that produces the two economic images
pub trait EconRenderer {
    /// Human-readable renderer name, used in progress messages
    fn name(&self) -> &str;

    /// Produce the scatter plot and the code screenshot
    fn render(&self) -> Result<()>;
}

/// Runs the embedded R source through an external interpreter
///
/// The source is written to disk first and intentionally left there
/// afterwards; the script itself writes `econ_scatter.png` and
/// `econ_code.png` into the working directory.
#[derive(Debug, Clone)]
pub struct RscriptRenderer {
    program: String,
    script_path: PathBuf,
}

impl Default for RscriptRenderer {
    fn default() -> Self {
        Self {
            program: "Rscript".to_string(),
            script_path: PathBuf::from(ECON_SCRIPT_FILE),
        }
    }
}

impl RscriptRenderer {
    /// Renderer invoking the given interpreter instead of `Rscript`
    pub fn with_program(program: impl Into<String>, script_path: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            script_path: script_path.into(),
        }
    }

    /// Whether the interpreter can be spawned at all
    pub fn is_available(&self) -> bool {
        Command::new(&self.program)
            .arg("--version")
            .output()
            .is_ok()
    }
}

impl EconRenderer for RscriptRenderer {
    fn name(&self) -> &str {
        &self.program
    }

    fn render(&self) -> Result<()> {
        fs::write(&self.script_path, R_SOURCE)?;

        info!(
            "running {} {}",
            self.program,
            self.script_path.display()
        );
        let output = Command::new(&self.program).arg(&self.script_path).output()?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            debug!("{}: {}", self.program, line);
        }

        if !output.status.success() {
            return Err(DriverError::ExternalScript {
                program: self.program.clone(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

/// Produces the same two artifacts in-process
///
/// The dataset, correlation and regression mirror what the embedded R
/// source computes, and the code screenshot renders that source as plain
/// text.
#[derive(Debug, Clone)]
pub struct NativeEconRenderer {
    params: EconParams,
    scatter_path: PathBuf,
    code_path: PathBuf,
}

impl Default for NativeEconRenderer {
    fn default() -> Self {
        Self {
            params: EconParams::default(),
            scatter_path: PathBuf::from(ECON_SCATTER_PNG),
            code_path: PathBuf::from(ECON_CODE_PNG),
        }
    }
}

impl NativeEconRenderer {
    /// Renderer writing to the given paths instead of the working directory
    pub fn with_outputs(scatter_path: impl Into<PathBuf>, code_path: impl Into<PathBuf>) -> Self {
        Self {
            params: EconParams::default(),
            scatter_path: scatter_path.into(),
            code_path: code_path.into(),
        }
    }
}

impl EconRenderer for NativeEconRenderer {
    fn name(&self) -> &str {
        "native"
    }

    fn render(&self) -> Result<()> {
        let dataset = generate_econ_dataset(&self.params)?;

        let correlation = pearson_correlation(&dataset.cpi_inflation, &dataset.unemployment)?;
        let fit = fit_linear(&dataset.cpi_inflation, &dataset.unemployment)?;
        info!(
            "CPI inflation vs unemployment: correlation {:.3}, R-squared {:.3}",
            correlation, fit.r_squared
        );

        let labels = ScatterLabels {
            title: "Relationship Between CPI Inflation and Unemployment Rate".to_string(),
            x_label: "CPI Inflation Rate (%)".to_string(),
            y_label: "Unemployment Rate (%)".to_string(),
            footnote: "Data: Synthetic Economic Dataset (1990-2023)".to_string(),
        };
        render_scatter_regression(
            &self.scatter_path,
            &dataset.cpi_inflation,
            &dataset.unemployment,
            &fit,
            correlation,
            &labels,
        )?;

        render_code_screenshot(&self.code_path, R_SOURCE, CodeLanguage::PlainText)?;

        Ok(())
    }
}

/// Pick the interpreter-backed renderer when one is present, the native
/// implementation otherwise
pub fn select_renderer() -> Box<dyn EconRenderer> {
    let rscript = RscriptRenderer::default();
    if rscript.is_available() {
        Box::new(rscript)
    } else {
        info!("Rscript not found on PATH, using the native renderer");
        Box::new(NativeEconRenderer::default())
    }
}
