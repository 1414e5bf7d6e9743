//! Two-panel case/death chart with forecast overlay

use crate::{Result, RenderError, PANEL_HEIGHT, PANEL_WIDTH};
use chrono::NaiveDate;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::error::Error;
use std::path::Path;

const CASE_COLOR: RGBColor = RGBColor(31, 119, 180);
const FORECAST_COLOR: RGBColor = RGBColor(255, 127, 14);
const DEATH_COLOR: RGBColor = RGBColor(214, 39, 40);

/// Render the stacked cases/deaths panels
///
/// The first `train_len` case observations are drawn solid, the held-out
/// tail dimmed, and the forecast dashed on the same axis.
pub fn render_case_panels(
    path: &Path,
    dates: &[NaiveDate],
    cases: &[f64],
    deaths: &[f64],
    train_len: usize,
    forecast_dates: &[NaiveDate],
    forecast: &[f64],
) -> Result<()> {
    if dates.len() != cases.len() || dates.len() != deaths.len() {
        return Err(RenderError::InvalidInput(format!(
            "Series lengths differ: {} dates, {} cases, {} deaths",
            dates.len(),
            cases.len(),
            deaths.len()
        )));
    }
    if dates.len() < 2 {
        return Err(RenderError::InvalidInput(
            "Need at least 2 observations to draw the panels".to_string(),
        ));
    }
    if train_len == 0 || train_len > dates.len() {
        return Err(RenderError::InvalidInput(format!(
            "Training length {} is outside the series of {} observations",
            train_len,
            dates.len()
        )));
    }
    if forecast_dates.len() != forecast.len() {
        return Err(RenderError::InvalidInput(format!(
            "Forecast lengths differ: {} dates, {} values",
            forecast_dates.len(),
            forecast.len()
        )));
    }

    draw(path, dates, cases, deaths, train_len, forecast_dates, forecast)
        .map_err(|e| RenderError::Backend(e.to_string()))
}

fn draw(
    path: &Path,
    dates: &[NaiveDate],
    cases: &[f64],
    deaths: &[f64],
    train_len: usize,
    forecast_dates: &[NaiveDate],
    forecast: &[f64],
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (PANEL_WIDTH, PANEL_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 1));

    let x_start = dates[0];
    let x_end = *dates.last().unwrap_or(&dates[0]);

    let case_max = cases
        .iter()
        .chain(forecast.iter())
        .cloned()
        .fold(1.0f64, f64::max)
        * 1.05;

    let mut case_chart = ChartBuilder::on(&panels[0])
        .caption(
            "COVID-19 Daily Cases with ARIMA Forecasting",
            ("sans-serif", 26),
        )
        .margin(10)
        .x_label_area_size(28)
        .y_label_area_size(70)
        .build_cartesian_2d(x_start..x_end, 0.0f64..case_max)?;

    case_chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y").to_string())
        .y_desc("Daily Cases")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 13))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let train_points = dates[..train_len]
        .iter()
        .zip(cases[..train_len].iter())
        .map(|(d, c)| (*d, *c));
    case_chart
        .draw_series(LineSeries::new(train_points, CASE_COLOR.stroke_width(2)))?
        .label("Actual Cases")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], CASE_COLOR.stroke_width(2)));

    // Held-out tail, same color but dimmed
    if train_len < dates.len() {
        let tail_points = dates[train_len..]
            .iter()
            .zip(cases[train_len..].iter())
            .map(|(d, c)| (*d, *c));
        case_chart.draw_series(LineSeries::new(
            tail_points,
            CASE_COLOR.mix(0.3).stroke_width(2),
        ))?;
    }

    let forecast_points = forecast_dates
        .iter()
        .zip(forecast.iter())
        .map(|(d, v)| (*d, *v));
    case_chart
        .draw_series(DashedLineSeries::new(
            forecast_points,
            6,
            4,
            FORECAST_COLOR.stroke_width(2),
        ))?
        .label("ARIMA Forecast")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], FORECAST_COLOR.stroke_width(2))
        });

    case_chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 15))
        .draw()?;

    let death_max = deaths.iter().cloned().fold(1.0f64, f64::max) * 1.1;

    let mut death_chart = ChartBuilder::on(&panels[1])
        .caption("COVID-19 Daily Deaths", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(70)
        .build_cartesian_2d(x_start..x_end, 0.0f64..death_max)?;

    death_chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&|d: &NaiveDate| d.format("%Y").to_string())
        .x_desc("Date")
        .y_desc("Daily Deaths")
        .axis_desc_style(("sans-serif", 16))
        .label_style(("sans-serif", 13))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    let death_points = dates.iter().zip(deaths.iter()).map(|(d, v)| (*d, *v));
    death_chart
        .draw_series(LineSeries::new(death_points, DEATH_COLOR.stroke_width(2)))?
        .label("Daily Deaths")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], DEATH_COLOR.stroke_width(2)));

    death_chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .label_font(("sans-serif", 15))
        .draw()?;

    root.present()?;
    Ok(())
}
