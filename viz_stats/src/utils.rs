//! Utility helpers for model fitting

/// Split a series into training and test sets
///
/// Returns `(train, test)` where the test set holds the trailing
/// `test_ratio` share of the data, rounded to the nearest observation.
/// A ratio outside (0, 1) yields the whole series as training data.
pub fn train_test_split(data: &[f64], test_ratio: f64) -> (Vec<f64>, Vec<f64>) {
    if data.is_empty() || test_ratio <= 0.0 || test_ratio >= 1.0 {
        return (data.to_vec(), Vec::new());
    }

    let test_size = (data.len() as f64 * test_ratio).round() as usize;
    let train_size = data.len() - test_size;

    let train = data[..train_size].to_vec();
    let test = data[train_size..].to_vec();

    (train, test)
}
