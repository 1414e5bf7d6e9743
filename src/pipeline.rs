//! The four generator routines, invoked in sequence
//!
//! Every routine writes its own files and none depends on another's
//! output; the ordering only shapes the progress log. A failure in the
//! economic step is logged and skipped, any other failure aborts the run.

use crate::econ::{self, EconRenderer};
use crate::error::Result;
use chrono::NaiveDate;
use log::{error, info};
use std::path::Path;
use viz_data::covid::{generate_case_series, CovidSeriesParams};
use viz_data::sample::normal_sample;
use viz_render::{
    render_case_panels, render_code_screenshot, render_stats_bars, CodeLanguage,
};
use viz_stats::models::arima::Arima;
use viz_stats::models::{ForecastModel, TrainedForecastModel};
use viz_stats::{train_test_split, SummaryStats};

pub const COVID_TIMESERIES_PNG: &str = "covid_timeseries.png";
pub const COVID_CODE_PNG: &str = "covid_code.png";
pub const JAVA_STATS_PNG: &str = "java_stats.png";
pub const JAVA_CODE_PNG: &str = "java_code.png";

/// Share of the case series held out from model training
const HOLDOUT_RATIO: f64 = 0.1;
/// Forecast horizon, in days
const FORECAST_HORIZON: usize = 60;

/// Descriptive-statistics sample configuration
const SAMPLE_SIZE: usize = 1000;
const SAMPLE_MEAN: f64 = 100.0;
const SAMPLE_SD: f64 = 15.0;
const SAMPLE_SEED: u64 = 42;

const PYTHON_SOURCE: &str = include_str!("../assets/covid_analysis.py");
const JAVA_SOURCE: &str = include_str!("../assets/stat_analysis.java");

/// Generate all six portfolio images
pub fn run() -> Result<()> {
    info!("starting portfolio visualization generation");

    covid_timeseries()?;
    covid_code()?;

    let renderer = econ::select_renderer();
    run_econ_step(renderer.as_ref());

    java_stats()?;
    java_code()?;

    info!("all portfolio visualizations generated");
    Ok(())
}

/// Run the economic step, logging failure instead of propagating it
///
/// Returns whether the step succeeded. This is the single non-fatal step
/// in the pipeline: a missing or broken interpreter should not cost the
/// remaining images.
pub fn run_econ_step(renderer: &dyn EconRenderer) -> bool {
    match renderer.render() {
        Ok(()) => {
            info!(
                "economic analysis images saved ({} renderer)",
                renderer.name()
            );
            true
        }
        Err(err) => {
            error!("economic analysis step failed, continuing: {}", err);
            false
        }
    }
}

/// Case/death series with an ARIMA forecast overlay
fn covid_timeseries() -> Result<()> {
    info!("creating COVID-19 time series visualization");

    let params = CovidSeriesParams::default();
    let series = generate_case_series(&params)?;
    let dates = series.dates();
    let cases = series.cases();
    let deaths = series.deaths();

    let (train, _held_out) = train_test_split(&cases, HOLDOUT_RATIO);

    let model = Arima::new(2, 1, 2)?;
    let trained = model.train(&train)?;
    info!(
        "{} fit: sigma2 {:.1}, AIC {:.1}, BIC {:.1}",
        trained.name(),
        trained.sigma2(),
        trained.aic(),
        trained.bic()
    );

    let forecast = trained.forecast(FORECAST_HORIZON)?;

    // Forecast dates start at the first held-out day
    let anchor = dates
        .get(train.len())
        .or_else(|| dates.last())
        .copied()
        .unwrap_or(params.start);
    let forecast_dates: Vec<NaiveDate> =
        anchor.iter_days().take(FORECAST_HORIZON).collect();

    render_case_panels(
        Path::new(COVID_TIMESERIES_PNG),
        &dates,
        &cases,
        &deaths,
        train.len(),
        &forecast_dates,
        forecast.values(),
    )?;

    info!("saved {}", COVID_TIMESERIES_PNG);
    Ok(())
}

/// Screenshot of the Python analysis source
fn covid_code() -> Result<()> {
    info!("creating COVID-19 Python code screenshot");
    render_code_screenshot(Path::new(COVID_CODE_PNG), PYTHON_SOURCE, CodeLanguage::Python)?;
    info!("saved {}", COVID_CODE_PNG);
    Ok(())
}

/// Bar chart of descriptive statistics over a seeded normal sample
fn java_stats() -> Result<()> {
    info!("creating descriptive statistics chart");

    let sample = normal_sample(SAMPLE_SIZE, SAMPLE_MEAN, SAMPLE_SD, SAMPLE_SEED)?;
    let stats = SummaryStats::from_sample(&sample)?;
    info!(
        "sample of {}: mean {:.2}, variance {:.2}",
        SAMPLE_SIZE, stats.mean, stats.variance
    );

    render_stats_bars(
        Path::new(JAVA_STATS_PNG),
        &stats,
        SAMPLE_SIZE,
        SAMPLE_MEAN,
        SAMPLE_SD,
    )?;

    info!("saved {}", JAVA_STATS_PNG);
    Ok(())
}

/// Screenshot of the Java analysis source
fn java_code() -> Result<()> {
    info!("creating Java code screenshot");
    render_code_screenshot(Path::new(JAVA_CODE_PNG), JAVA_SOURCE, CodeLanguage::Java)?;
    info!("saved {}", JAVA_CODE_PNG);
    Ok(())
}
