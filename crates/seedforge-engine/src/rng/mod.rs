//! Seeded RNG streams for the host, array, and engine subsystems.

mod array;
mod engine;
mod host;

pub use array::ArrayRng;
pub use engine::EngineRng;
pub use host::HostRng;
