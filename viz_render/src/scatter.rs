//! Scatter plot with fitted regression line

use crate::{Result, RenderError, PANEL_HEIGHT, PANEL_WIDTH};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;
use viz_stats::LinearFit;

const POINT_COLOR: RGBColor = RGBColor(46, 134, 171);
const LINE_COLOR: RGBColor = RGBColor(162, 59, 114);

/// Labels for the scatter plot
#[derive(Debug, Clone)]
pub struct ScatterLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub footnote: String,
}

/// Render a labeled scatter plot with its regression line
///
/// The subtitle reports the Pearson correlation and the fit's R².
pub fn render_scatter_regression(
    path: &Path,
    x: &[f64],
    y: &[f64],
    fit: &LinearFit,
    correlation: f64,
    labels: &ScatterLabels,
) -> Result<()> {
    if x.len() != y.len() {
        return Err(RenderError::InvalidInput(format!(
            "Sample lengths differ: {} vs {}",
            x.len(),
            y.len()
        )));
    }
    if x.len() < 2 {
        return Err(RenderError::InvalidInput(
            "Need at least 2 points for a scatter plot".to_string(),
        ));
    }

    draw(path, x, y, fit, correlation, labels).map_err(|e| RenderError::Backend(e.to_string()))
}

fn padded_range(values: &[f64]) -> (f64, f64) {
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((max - min) * 0.05).max(0.1);
    (min - pad, max + pad)
}

fn draw(
    path: &Path,
    x: &[f64],
    y: &[f64],
    fit: &LinearFit,
    correlation: f64,
    labels: &ScatterLabels,
) -> std::result::Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (PANEL_WIDTH, PANEL_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_min, x_max) = padded_range(x);
    let (y_min, y_max) = padded_range(y);

    let mut chart = ChartBuilder::on(&root)
        .caption(labels.title.as_str(), ("sans-serif", 26))
        .margin(12)
        .margin_top(56)
        .x_label_area_size(52)
        .y_label_area_size(64)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_desc(labels.x_label.as_str())
        .y_desc(labels.y_label.as_str())
        .axis_desc_style(("sans-serif", 17))
        .label_style(("sans-serif", 13))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.05))
        .draw()?;

    chart.draw_series(
        x.iter()
            .zip(y.iter())
            .map(|(&a, &b)| Circle::new((a, b), 4, POINT_COLOR.mix(0.7).filled())),
    )?;

    chart.draw_series(std::iter::once(PathElement::new(
        vec![(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
        LINE_COLOR.stroke_width(3),
    )))?;

    // Subtitle under the caption, centered
    let subtitle = format!(
        "Correlation coefficient: {:.3} | R\u{b2} = {:.3}",
        correlation, fit.r_squared
    );
    let subtitle_color = BLACK.mix(0.7);
    let subtitle_style = TextStyle::from(("sans-serif", 17).into_font())
        .color(&subtitle_color)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(
        subtitle,
        ((PANEL_WIDTH / 2) as i32, 40),
        subtitle_style,
    ))?;

    let footnote_color = BLACK.mix(0.5);
    let footnote_style = TextStyle::from(("sans-serif", 13).into_font())
        .color(&footnote_color)
        .pos(Pos::new(HPos::Right, VPos::Bottom));
    root.draw(&Text::new(
        labels.footnote.clone(),
        ((PANEL_WIDTH - 12) as i32, (PANEL_HEIGHT - 6) as i32),
        footnote_style,
    ))?;

    root.present()?;
    Ok(())
}
