use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// General-purpose RNG stream for scalar draws, shuffles, and choices.
#[derive(Debug, Clone)]
pub struct HostRng {
    rng: StdRng,
}

impl HostRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    pub fn gen_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Shuffle `values` in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// Pick one element, or `None` from an empty slice.
    pub fn choose<'a, T>(&mut self, values: &'a [T]) -> Option<&'a T> {
        values.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_scalars() {
        let mut a = HostRng::from_seed(42);
        let mut b = HostRng::from_seed(42);
        for _ in 0..100 {
            assert_eq!(a.gen_u64(), b.gen_u64());
        }
    }

    #[test]
    fn gen_range_respects_bounds() {
        let mut rng = HostRng::from_seed(3);
        for _ in 0..100 {
            let v: i64 = rng.gen_range(10..20);
            assert!((10..20).contains(&v));
        }
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = HostRng::from_seed(8);
        let mut values: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut values);
        values.sort_unstable();
        assert_eq!(values, (0..32).collect::<Vec<u32>>());
    }

    #[test]
    fn choose_from_empty_slice_is_none() {
        let mut rng = HostRng::from_seed(1);
        let empty: [u64; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
