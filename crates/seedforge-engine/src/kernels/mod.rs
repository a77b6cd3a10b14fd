//! Kernel selection policy and the reduction kernels it governs.

pub mod policy;
pub mod reduce;

pub use reduce::{dot, sum, ReduceKernel};
