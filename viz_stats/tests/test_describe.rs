use viz_data::sample::normal_sample;
use viz_stats::describe::SummaryStats;
use viz_stats::regression::{fit_linear, pearson_correlation};

#[test]
fn seeded_normal_sample_summary_invariants() {
    let sample = normal_sample(1000, 100.0, 15.0, 42).unwrap();
    let stats = SummaryStats::from_sample(&sample).unwrap();

    assert!(stats.q1 < stats.median);
    assert!(stats.median < stats.q3);
    assert!(stats.min <= stats.q1);
    assert!(stats.max >= stats.q3);

    // With n = 1000 the sample mean should sit close to the population mean
    assert!((stats.mean - 100.0).abs() < 2.0);
    assert!((stats.std_dev - 15.0).abs() < 2.0);
    assert!(stats.variance > 0.0);
}

#[test]
fn correlated_indicators_have_negative_relationship() {
    // Construct counter-cyclical series the way the economic dataset does
    let x: Vec<f64> = (0..200).map(|i| (i as f64 / 8.0).sin() + 3.0).collect();
    let y: Vec<f64> = x.iter().map(|v| 10.0 - 1.5 * v).collect();

    let corr = pearson_correlation(&x, &y).unwrap();
    assert!(corr < -0.99);

    let fit = fit_linear(&x, &y).unwrap();
    assert!(fit.slope < 0.0);
    assert!(fit.r_squared > 0.99);
}
