//! Run stamps recording the reproducibility state a run was started with.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::kernels::policy;
use crate::seed;

/// Snapshot of the applied reproducibility state. `run_id` identifies the
/// run itself and is intentionally not derived from the seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStamp {
    pub run_id: Uuid,
    pub seed: u64,
    pub deterministic_kernels: bool,
    pub kernel_autotune: bool,
    pub engine_lanes: usize,
}

impl RunStamp {
    /// Captures the live kernel flags and lane count for `seed`.
    pub fn capture(seed: u64) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            seed,
            deterministic_kernels: policy::deterministic_kernels(),
            kernel_autotune: policy::kernel_autotune(),
            engine_lanes: seed::with_rngs(|rngs| rngs.engine.lane_count()),
        }
    }

    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(self).map_err(|source| EngineError::StampEncode { source })
    }
}
