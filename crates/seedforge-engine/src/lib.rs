//! Reproducible randomness for simulation and training runs.
//!
//! - **seed**: root-seed application and the process-wide stream registry
//! - **rng**: host, array, and engine RNG streams
//! - **kernels**: determinism flags and the reduction kernels they select
//! - **config**: on-disk reproducibility profiles
//! - **provenance**: run stamps recording the applied state

pub mod config;
pub mod error;
pub mod kernels;
pub mod provenance;
pub mod rng;
pub mod seed;

pub use config::ReproConfig;
pub use error::EngineError;
pub use kernels::policy::{
    deterministic_kernels, kernel_autotune, set_deterministic_kernels, set_kernel_autotune,
};
pub use provenance::RunStamp;
pub use rng::{ArrayRng, EngineRng, HostRng};
pub use seed::{initialize_seed, with_rngs, SeedBundle, SeedSequence};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// SeedForge native engine module.
#[cfg(feature = "python")]
#[pymodule]
mod _engine {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    #[pymodule_export]
    const __version__: &str = "0.1.0";

    /// Re-seed every RNG subsystem and pin deterministic kernel selection.
    #[pyfunction]
    fn initialize_seed(seed: u64) {
        crate::seed::initialize_seed(seed);
    }

    /// Apply a JSON reproducibility config and return the run stamp as JSON.
    #[pyfunction]
    fn apply_config(config_json: &str) -> PyResult<String> {
        let config: crate::ReproConfig = serde_json::from_str(config_json)
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        let stamp = config.apply();
        stamp
            .to_json()
            .map_err(|err| PyValueError::new_err(err.to_string()))
    }

    #[pyfunction]
    fn host_uniform() -> f64 {
        crate::seed::with_rngs(|rngs| rngs.host.gen_f64())
    }

    #[pyfunction]
    fn array_uniform(n: usize) -> Vec<f64> {
        crate::seed::with_rngs(|rngs| rngs.array.uniform(n).to_vec())
    }

    #[pyfunction]
    fn reduce_sum(values: Vec<f64>) -> f64 {
        crate::kernels::reduce::sum(&values)
    }

    #[pyfunction]
    fn deterministic_kernels() -> bool {
        crate::kernels::policy::deterministic_kernels()
    }

    #[pyfunction]
    fn kernel_autotune() -> bool {
        crate::kernels::policy::kernel_autotune()
    }
}
