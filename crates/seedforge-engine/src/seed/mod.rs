//! Root-seed application across every RNG subsystem.
//!
//! `initialize_seed` is the one-call entry point an experiment makes at
//! startup. Code that wants to avoid the process-wide registry can hold an
//! explicit [`SeedBundle`] instead.

mod sequence;

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::kernels::policy;
use crate::rng::{ArrayRng, EngineRng, HostRng};

pub use sequence::SeedSequence;

/// Every seedable stream in the process: the host RNG, the array RNG, and the
/// engine RNG (host stream plus lane streams).
#[derive(Debug, Clone)]
pub struct SeedBundle {
    pub host: HostRng,
    pub array: ArrayRng,
    pub engine: EngineRng,
}

impl SeedBundle {
    pub fn from_seed(seed: u64) -> Self {
        Self::with_lanes(seed, default_lane_count())
    }

    /// Derives one sub-seed per subsystem so the streams are decorrelated.
    pub fn with_lanes(seed: u64, lane_count: usize) -> Self {
        let mut seq = SeedSequence::new(seed);
        Self {
            host: HostRng::from_seed(seq.next_subseed()),
            array: ArrayRng::from_seed(seq.next_subseed()),
            engine: EngineRng::from_seed(seq.next_subseed(), lane_count),
        }
    }
}

static REGISTRY: OnceLock<Mutex<SeedBundle>> = OnceLock::new();

fn registry() -> &'static Mutex<SeedBundle> {
    // An unseeded process draws from an entropy-derived root, matching the
    // pre-seeding behavior of the library RNGs this replaces.
    REGISTRY.get_or_init(|| Mutex::new(SeedBundle::from_seed(entropy_seed())))
}

fn entropy_seed() -> u64 {
    StdRng::from_entropy().gen::<u64>()
}

/// Number of engine lanes seeded by default, one per rayon worker.
pub fn default_lane_count() -> usize {
    rayon::current_num_threads()
}

/// Runs `f` against the process-wide stream registry.
pub fn with_rngs<R>(f: impl FnOnce(&mut SeedBundle) -> R) -> R {
    // Reseeding must keep working after a panicked draw closure.
    let mut bundle = registry().lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut bundle)
}

pub(crate) fn reseed_all(seed: u64, lane_count: usize) {
    let bundle = SeedBundle::with_lanes(seed, lane_count);
    *registry().lock().unwrap_or_else(PoisonError::into_inner) = bundle;
}

/// Re-seeds the host, array, and engine RNGs (host stream and all lanes) from
/// `seed`, pins deterministic kernel selection on, and turns kernel
/// auto-tuning off.
///
/// Call once before any randomness-consuming work. Calling again fully
/// resets the streams; nothing accumulates between calls.
pub fn initialize_seed(seed: u64) {
    reseed_all(seed, default_lane_count());
    policy::set_deterministic_kernels(true);
    policy::set_kernel_autotune(false);
    log::info!("reseeded rng subsystems, deterministic kernels pinned (seed = {seed})");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_streams_are_decorrelated() {
        let mut bundle = SeedBundle::with_lanes(42, 0);
        let host = bundle.host.gen_f64();
        let array = bundle.array.uniform(1)[0];
        let engine = bundle.engine.draw_host();
        assert_ne!(host, array);
        assert_ne!(host, engine);
    }

    #[test]
    fn equal_seeds_build_equal_bundles() {
        let mut a = SeedBundle::with_lanes(7, 3);
        let mut b = SeedBundle::with_lanes(7, 3);
        assert_eq!(a.host.gen_u64(), b.host.gen_u64());
        assert_eq!(a.array.uniform(16), b.array.uniform(16));
        assert_eq!(a.engine.draw_host(), b.engine.draw_host());
    }

    #[test]
    fn zero_seed_is_usable() {
        let mut a = SeedBundle::with_lanes(0, 0);
        let mut b = SeedBundle::with_lanes(1, 0);
        assert_ne!(a.host.gen_f64(), b.host.gen_f64());
    }
}
