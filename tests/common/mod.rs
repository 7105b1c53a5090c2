//! Shared test utilities and fixtures.

#![allow(dead_code)]

use tally::{seeded_rng, SizedGenerator};

/// Generate a reproducible `i32` sequence.
pub fn seeded_sequence(count: usize, seed: u64) -> Vec<i32> {
    SizedGenerator::new(count).generate_with(&mut seeded_rng(seed))
}

/// Widen `i32` values to `i64` so totals cannot overflow.
pub fn widen(values: &[i32]) -> Vec<i64> {
    values.iter().copied().map(i64::from).collect()
}

/// Reference total computed without going through `tally::sum`.
pub fn reference_total(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}
