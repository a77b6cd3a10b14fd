use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, StandardNormal};

use crate::error::EngineError;

/// RNG stream backing array-shaped draws.
#[derive(Debug, Clone)]
pub struct ArrayRng {
    rng: StdRng,
}

impl ArrayRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform [0, 1) samples.
    pub fn uniform(&mut self, n: usize) -> Array1<f64> {
        Array1::from_shape_fn(n, |_| self.rng.gen::<f64>())
    }

    pub fn standard_normal(&mut self, shape: (usize, usize)) -> Array2<f64> {
        Array2::from_shape_fn(shape, |_| self.rng.sample::<f64, _>(StandardNormal))
    }

    /// Samples from a normal distribution with the given mean and standard
    /// deviation. Invalid parameters surface the distribution error
    /// unchanged.
    pub fn normal(
        &mut self,
        n: usize,
        mean: f64,
        std_dev: f64,
    ) -> Result<Array1<f64>, EngineError> {
        let dist = Normal::new(mean, std_dev)?;
        Ok(Array1::from_shape_fn(n, |_| dist.sample(&mut self.rng)))
    }
}
