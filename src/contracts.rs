// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the generation and summation invariants.
//!
//! Debug-mode assertions that verify the crate's two data-model
//! invariants:
//!
//! 1. A generated sequence has exactly the requested length.
//! 2. Summation never mutates its input; `&[T]` enforces that at the
//!    type level, so no runtime check exists for it.
//!
//! The checks use `debug_assert!`, so they are zero-cost in release
//! builds and fail fast during development and testing.

use crate::sum::Summable;

// ═══════════════════════════════════════════════════════════════════════════
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ═══════════════════════════════════════════════════════════════════════════

/// Static assertion that the additive identities are genuine zeros,
/// covering every primitive the summation trait is implemented for.
/// Evaluated at compile time: if one fails, the crate does not build.
const _: () = {
    assert!(u8::ZERO == 0);
    assert!(u16::ZERO == 0);
    assert!(u32::ZERO == 0);
    assert!(u64::ZERO == 0);
    assert!(u128::ZERO == 0);
    assert!(usize::ZERO == 0);
    assert!(i8::ZERO == 0);
    assert!(i16::ZERO == 0);
    assert!(i32::ZERO == 0);
    assert!(i64::ZERO == 0);
    assert!(i128::ZERO == 0);
    assert!(isize::ZERO == 0);
    assert!(f32::ZERO == 0.0);
    assert!(f64::ZERO == 0.0);
};

// ═══════════════════════════════════════════════════════════════════════════
// SEQUENCE CONTRACTS
// ═══════════════════════════════════════════════════════════════════════════

/// Check that a generated sequence has exactly the requested length.
///
/// # Panics (debug builds only)
/// Panics if `values.len() != requested`.
#[inline]
pub fn check_sequence_len<T>(values: &[T], requested: usize) {
    debug_assert!(
        values.len() == requested,
        "Contract violation: generated {} values but {} were requested",
        values.len(),
        requested
    );
}
