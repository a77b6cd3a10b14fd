//! Reduction kernels with a deterministic and a parallel variant.
//!
//! Floating-point addition is not associative, so the parallel kernel's
//! result depends on how rayon schedules the partial sums. The pairwise
//! kernel fixes the association order and is bit-stable across runs.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use super::policy;

const PAIRWISE_BLOCK: usize = 128;
const PARALLEL_CHUNK: usize = 4096;
const TUNE_PROBE_LEN: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceKernel {
    Pairwise,
    Parallel,
}

static TUNED: OnceLock<ReduceKernel> = OnceLock::new();

/// Sums `values` with the kernel the current policy selects.
pub fn sum(values: &[f64]) -> f64 {
    match select_kernel() {
        ReduceKernel::Pairwise => pairwise_sum(values),
        ReduceKernel::Parallel => parallel_sum(values),
    }
}

/// Dot product under the same kernel policy as [`sum`].
///
/// # Panics
/// Panics if the operands differ in length.
pub fn dot(xs: &[f64], ys: &[f64]) -> f64 {
    assert_eq!(xs.len(), ys.len(), "dot operands must have equal length");
    match select_kernel() {
        ReduceKernel::Pairwise => pairwise_dot(xs, ys),
        ReduceKernel::Parallel => parallel_dot(xs, ys),
    }
}

fn select_kernel() -> ReduceKernel {
    if policy::deterministic_kernels() {
        ReduceKernel::Pairwise
    } else if policy::kernel_autotune() {
        tuned_kernel()
    } else {
        ReduceKernel::Parallel
    }
}

/// Fixed association order; bit-identical across runs for the same input.
pub fn pairwise_sum(values: &[f64]) -> f64 {
    if values.len() <= PAIRWISE_BLOCK {
        values.iter().sum()
    } else {
        let (left, right) = values.split_at(values.len() / 2);
        pairwise_sum(left) + pairwise_sum(right)
    }
}

/// Chunked rayon reduction; partial-sum order depends on scheduling.
pub fn parallel_sum(values: &[f64]) -> f64 {
    values
        .par_chunks(PARALLEL_CHUNK)
        .map(|chunk| chunk.iter().sum::<f64>())
        .sum()
}

fn pairwise_dot(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() <= PAIRWISE_BLOCK {
        xs.iter().zip(ys).map(|(x, y)| x * y).sum()
    } else {
        let mid = xs.len() / 2;
        let (xl, xr) = xs.split_at(mid);
        let (yl, yr) = ys.split_at(mid);
        pairwise_dot(xl, yl) + pairwise_dot(xr, yr)
    }
}

fn parallel_dot(xs: &[f64], ys: &[f64]) -> f64 {
    xs.par_iter().zip(ys.par_iter()).map(|(x, y)| x * y).sum()
}

/// Kernel picked by a one-shot timing probe, cached for the process
/// lifetime. The choice depends on wall-clock measurements, which is what
/// the deterministic-kernels flag exists to bypass.
pub fn tuned_kernel() -> ReduceKernel {
    *TUNED.get_or_init(|| {
        let probe: Vec<f64> = (0..TUNE_PROBE_LEN).map(|i| i as f64 * 1e-3).collect();
        let pairwise = probe_cost(|| pairwise_sum(&probe));
        let parallel = probe_cost(|| parallel_sum(&probe));
        let kernel = if parallel < pairwise {
            ReduceKernel::Parallel
        } else {
            ReduceKernel::Pairwise
        };
        log::debug!(
            "auto-tuned reduce kernel: {kernel:?} (pairwise {pairwise:?}, parallel {parallel:?})"
        );
        kernel
    })
}

fn probe_cost(run: impl Fn() -> f64) -> Duration {
    let mut best = Duration::MAX;
    for _ in 0..3 {
        let start = Instant::now();
        std::hint::black_box(run());
        best = best.min(start.elapsed());
    }
    best
}
