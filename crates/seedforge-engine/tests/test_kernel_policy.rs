//! Kernel selection under each flag combination.
//!
//! The flags are process-wide, so tests that set them hold `FLAG_LOCK`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use seedforge_engine::kernels::reduce::{self, ReduceKernel};
use seedforge_engine::{set_deterministic_kernels, set_kernel_autotune};

static FLAG_LOCK: Mutex<()> = Mutex::new(());

fn flag_guard() -> MutexGuard<'static, ()> {
    FLAG_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Non-integer values, so association order shows up in the low bits.
fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| (i as f64).sin() / 7.0).collect()
}

#[test]
fn deterministic_sum_is_bit_stable() {
    let _guard = flag_guard();
    set_deterministic_kernels(true);
    set_kernel_autotune(false);

    let values = ramp(10_000);
    let a = reduce::sum(&values);
    let b = reduce::sum(&values);
    assert_eq!(a.to_bits(), b.to_bits());
}

#[test]
fn kernels_agree_within_tolerance() {
    let values = ramp(50_000);
    let pairwise = reduce::pairwise_sum(&values);
    let parallel = reduce::parallel_sum(&values);
    assert!((pairwise - parallel).abs() <= 1e-9 * values.len() as f64);
}

#[test]
fn deterministic_flag_overrides_autotune() {
    let _guard = flag_guard();
    set_deterministic_kernels(true);
    set_kernel_autotune(true);

    let values = ramp(4_096);
    assert_eq!(
        reduce::sum(&values).to_bits(),
        reduce::pairwise_sum(&values).to_bits()
    );
}

#[test]
fn fast_path_dispatches_to_parallel_kernel() {
    let _guard = flag_guard();
    set_deterministic_kernels(false);
    set_kernel_autotune(false);

    // Integer-valued inputs sum exactly in f64, so the total is independent
    // of association order and the dispatch itself is what is under test.
    let values: Vec<f64> = (1..=100_000).map(|i| i as f64).collect();
    assert_eq!(reduce::sum(&values), 5_000_050_000.0);
}

#[test]
fn autotune_choice_is_sticky() {
    let first = reduce::tuned_kernel();
    let second = reduce::tuned_kernel();
    assert_eq!(first, second);
    assert!(matches!(
        first,
        ReduceKernel::Pairwise | ReduceKernel::Parallel
    ));
}

#[test]
fn dot_matches_manual_product_sum() {
    let _guard = flag_guard();
    set_deterministic_kernels(true);
    set_kernel_autotune(false);

    let xs: Vec<f64> = (0..512).map(|i| i as f64).collect();
    let ys: Vec<f64> = (0..512).map(|i| (i % 7) as f64).collect();
    let expected: f64 = xs.iter().zip(&ys).map(|(x, y)| x * y).sum();
    assert_eq!(reduce::dot(&xs, &ys), expected);
}

#[test]
#[should_panic(expected = "equal length")]
fn dot_rejects_mismatched_lengths() {
    reduce::dot(&[1.0, 2.0], &[1.0]);
}
