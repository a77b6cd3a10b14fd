//! Process-wide kernel selection flags.
//!
//! Defaults are the performance-first configuration: non-deterministic
//! kernels allowed, auto-tuning on. `initialize_seed` flips both.

use std::sync::atomic::{AtomicBool, Ordering};

static DETERMINISTIC_KERNELS: AtomicBool = AtomicBool::new(false);
static KERNEL_AUTOTUNE: AtomicBool = AtomicBool::new(true);

/// Whether kernel selection is pinned to deterministic implementations.
pub fn deterministic_kernels() -> bool {
    DETERMINISTIC_KERNELS.load(Ordering::Relaxed)
}

pub fn set_deterministic_kernels(enabled: bool) {
    DETERMINISTIC_KERNELS.store(enabled, Ordering::Relaxed);
}

/// Whether kernels may be picked from timing benchmarks.
pub fn kernel_autotune() -> bool {
    KERNEL_AUTOTUNE.load(Ordering::Relaxed)
}

pub fn set_kernel_autotune(enabled: bool) {
    KERNEL_AUTOTUNE.store(enabled, Ordering::Relaxed);
}
