//! On-disk reproducibility profiles.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::kernels::policy;
use crate::provenance::RunStamp;
use crate::seed;

/// Everything a run needs to reproduce its randomness: the root seed, the
/// kernel flags, and the engine lane count (`None` means one lane per rayon
/// worker).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReproConfig {
    pub seed: u64,
    pub deterministic_kernels: bool,
    pub kernel_autotune: bool,
    #[serde(default)]
    pub engine_lanes: Option<usize>,
}

impl ReproConfig {
    /// Fully-deterministic profile for `seed`, the state `initialize_seed`
    /// leaves behind.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            deterministic_kernels: true,
            kernel_autotune: false,
            engine_lanes: None,
        }
    }

    /// Reads the config at `path`, or writes `fallback()` there and returns
    /// it.
    pub fn load_or_init<F>(path: &Path, fallback: F) -> Result<Self, EngineError>
    where
        F: FnOnce() -> Self,
    {
        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| EngineError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&contents).map_err(|source| EngineError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| EngineError::ConfigWrite {
                    path: path.to_path_buf(),
                    source,
                })?;
            }
            let value = fallback();
            let serialized = serde_json::to_string_pretty(&value)
                .map_err(|source| EngineError::ConfigEncode { source })?;
            fs::write(path, serialized).map_err(|source| EngineError::ConfigWrite {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(value)
        }
    }

    /// Seeds every subsystem and sets both kernel flags as configured,
    /// returning a stamp of the applied state.
    pub fn apply(&self) -> RunStamp {
        let lane_count = self.engine_lanes.unwrap_or_else(seed::default_lane_count);
        seed::reseed_all(self.seed, lane_count);
        policy::set_deterministic_kernels(self.deterministic_kernels);
        policy::set_kernel_autotune(self.kernel_autotune);
        log::info!(
            "applied reproducibility config (seed = {}, lanes = {lane_count})",
            self.seed
        );
        RunStamp::capture(self.seed)
    }
}
