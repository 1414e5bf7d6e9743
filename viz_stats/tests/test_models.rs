use assert_approx_eq::assert_approx_eq;
use viz_stats::models::arima::Arima;
use viz_stats::models::{ForecastModel, ForecastResult, TrainedForecastModel};
use viz_stats::utils::train_test_split;

fn trending_series(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            // Deterministic pseudo-noise keeps the regression well conditioned
            let noise = ((i * 7919) % 1000) as f64 / 50.0 - 10.0;
            1000.0 + 1.2 * t + 500.0 * (2.0 * std::f64::consts::PI * t / 365.25).sin() + noise
        })
        .collect()
}

#[test]
fn arima_forecast_on_trending_series() {
    let data = trending_series(1000);
    let (train, held_out) = train_test_split(&data, 0.1);

    let model = Arima::new(2, 1, 2).unwrap();
    let trained = model.train(&train).unwrap();
    let forecast = trained.forecast(60).unwrap();

    assert_eq!(forecast.horizons(), 60);
    assert_eq!(forecast.values().len(), 60);

    // The first forecast step should land near the first held-out value,
    // not at some unrelated scale.
    let first_actual = held_out[0];
    let first_forecast = forecast.values()[0];
    assert!((first_forecast - first_actual).abs() < first_actual * 0.1);
}

#[test]
fn trained_model_reports_fit_diagnostics() {
    let data = trending_series(500);
    let model = Arima::new(2, 1, 2).unwrap();
    let trained = model.train(&data).unwrap();

    assert!(trained.sigma2() >= 0.0);
    assert!(trained.aic().is_finite());
    assert!(trained.bic().is_finite());
    assert_eq!(trained.ar_coefficients().len(), 2);
    assert_eq!(trained.ma_coefficients().len(), 2);
    assert_eq!(trained.name(), "ARIMA(2,1,2)");
}

#[test]
fn forecast_result_operations() {
    let values = vec![105.0, 106.0, 107.0];
    let forecast = ForecastResult::new(values.clone(), 3).unwrap();

    assert_eq!(forecast.horizons(), 3);
    assert_eq!(forecast.values(), &values);

    let json = forecast.to_json().unwrap();
    assert!(!json.is_empty());

    let actual = vec![106.0, 107.0, 108.0];
    let error = forecast.mean_absolute_error(&actual).unwrap();
    assert_approx_eq!(error, 1.0);

    let mse = forecast.mean_squared_error(&actual).unwrap();
    assert_approx_eq!(mse, 1.0);
}

#[test]
fn forecast_result_length_validation() {
    assert!(ForecastResult::new(vec![1.0, 2.0], 3).is_err());
    assert!(ForecastResult::new_with_intervals(vec![1.0], 1, vec![]).is_err());

    let forecast = ForecastResult::new(vec![1.0, 2.0], 2).unwrap();
    assert!(forecast.mean_absolute_error(&[1.0]).is_err());
}

#[test]
fn model_parameter_validation() {
    assert!(Arima::new(0, 0, 0).is_err());
    assert!(Arima::new(2, 3, 2).is_err());
    assert!(Arima::new(2, 1, 2).is_ok());
}
