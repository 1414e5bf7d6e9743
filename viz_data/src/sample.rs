//! Seeded sampling from a normal distribution

use crate::{DataError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Draw `n` i.i.d. samples from Normal(mean, sd) with a fixed seed
pub fn normal_sample(n: usize, mean: f64, sd: f64, seed: u64) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(DataError::InvalidInput(
            "Sample size must be positive".to_string(),
        ));
    }
    let normal = Normal::new(mean, sd)
        .map_err(|e| DataError::InvalidInput(format!("Bad distribution parameters: {}", e)))?;

    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n).map(|_| normal.sample(&mut rng)).collect())
}
