use chrono::NaiveDate;
use viz_render::scatter::ScatterLabels;
use viz_render::{
    render_case_panels, render_code_screenshot, render_scatter_regression, render_stats_bars,
    CodeLanguage,
};
use viz_stats::{fit_linear, SummaryStats};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 3, 1).unwrap() + chrono::Days::new(offset as u64)
}

#[test]
fn case_panels_have_panel_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.png");

    let dates: Vec<NaiveDate> = (0..120).map(day).collect();
    let cases: Vec<f64> = (0..120).map(|i| 1000.0 + 10.0 * i as f64).collect();
    let deaths: Vec<f64> = cases.iter().map(|c| c * 0.02).collect();
    let forecast_dates: Vec<NaiveDate> = (100..115).map(day).collect();
    let forecast: Vec<f64> = (100..115).map(|i| 1000.0 + 10.0 * i as f64).collect();

    render_case_panels(&path, &dates, &cases, &deaths, 100, &forecast_dates, &forecast).unwrap();

    assert_eq!(image::image_dimensions(&path).unwrap(), (1600, 900));
}

#[test]
fn case_panels_reject_mismatched_series() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("panels.png");

    let dates: Vec<NaiveDate> = (0..10).map(day).collect();
    let cases = vec![1.0; 9];
    let deaths = vec![0.0; 10];

    let result = render_case_panels(&path, &dates, &cases, &deaths, 5, &[], &[]);
    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn scatter_has_panel_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scatter.png");

    let x: Vec<f64> = (0..50).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = x.iter().map(|v| 8.0 - 0.5 * v).collect();
    let fit = fit_linear(&x, &y).unwrap();

    let labels = ScatterLabels {
        title: "Test Scatter".to_string(),
        x_label: "x".to_string(),
        y_label: "y".to_string(),
        footnote: "synthetic".to_string(),
    };

    render_scatter_regression(&path, &x, &y, &fit, -1.0, &labels).unwrap();

    assert_eq!(image::image_dimensions(&path).unwrap(), (1600, 900));
}

#[test]
fn stats_bars_have_panel_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bars.png");

    let sample: Vec<f64> = (0..100).map(|i| 100.0 + (i % 30) as f64).collect();
    let stats = SummaryStats::from_sample(&sample).unwrap();

    render_stats_bars(&path, &stats, sample.len(), 100.0, 15.0).unwrap();

    assert_eq!(image::image_dimensions(&path).unwrap(), (1600, 900));
}

#[test]
fn code_screenshots_are_exactly_resampled() {
    let dir = tempfile::tempdir().unwrap();

    // A short source renders natively far from 1200x900; the contract
    // still requires the exact target size.
    let short = dir.path().join("short.png");
    render_code_screenshot(&short, "print('hi')\n", CodeLanguage::Python).unwrap();
    assert_eq!(image::image_dimensions(&short).unwrap(), (1200, 900));

    // A wide, tall source must also land on the target size
    let long_line = "x = 1  # ".repeat(30);
    let big_source = vec![long_line; 80].join("\n");
    let big = dir.path().join("big.png");
    render_code_screenshot(&big, &big_source, CodeLanguage::Python).unwrap();
    assert_eq!(image::image_dimensions(&big).unwrap(), (1200, 900));
}

#[test]
fn code_screenshot_cleans_up_temp_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("code.png");

    render_code_screenshot(&path, "int x = 1;\n", CodeLanguage::Java).unwrap();

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(leftovers, vec![std::ffi::OsString::from("code.png")]);
}
