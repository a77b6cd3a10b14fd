use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::EngineError;
use crate::seed::SeedSequence;

/// Engine streams: one host stream plus one independent stream per parallel
/// lane. Lanes are seeded together so a run's draws do not depend on which
/// lane executes first.
#[derive(Debug, Clone)]
pub struct EngineRng {
    host: StdRng,
    lanes: Vec<StdRng>,
}

impl EngineRng {
    /// Derives the host stream and `lane_count` lane streams from `seed`.
    /// A zero lane count yields a host-only engine.
    pub fn from_seed(seed: u64, lane_count: usize) -> Self {
        let mut seq = SeedSequence::new(seed);
        let host = StdRng::seed_from_u64(seq.next_subseed());
        let lanes = seq
            .split(lane_count)
            .into_iter()
            .map(StdRng::seed_from_u64)
            .collect();
        Self { host, lanes }
    }

    pub fn lane_count(&self) -> usize {
        self.lanes.len()
    }

    pub fn draw_host(&mut self) -> f64 {
        self.host.gen::<f64>()
    }

    pub fn draw_lane(&mut self, lane: usize) -> Result<f64, EngineError> {
        let lanes = self.lanes.len();
        let rng = self
            .lanes
            .get_mut(lane)
            .ok_or(EngineError::LaneOutOfRange { lane, lanes })?;
        Ok(rng.gen::<f64>())
    }
}
