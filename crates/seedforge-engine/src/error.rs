use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the config, provenance, and draw paths. The seeding
/// path itself never constructs one; anything it hits propagates unchanged.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read config from {}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config from {}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode config")]
    ConfigEncode {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write config to {}", path.display())]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode run stamp")]
    StampEncode {
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid distribution parameters: {0}")]
    Distribution(#[from] rand_distr::NormalError),

    #[error("engine lane {lane} out of range ({lanes} lanes)")]
    LaneOutOfRange { lane: usize, lanes: usize },
}
