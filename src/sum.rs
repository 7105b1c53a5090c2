// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sequence summation over any type with addition and a zero.
//!
//! [`sum`] is a plain left fold from the additive identity. No Kahan
//! compensation, no tree reduction: the contract is exactly "what you get
//! adding left to right with `+`", including the overflow semantics of the
//! element type. Callers that want guaranteed wraparound pick a
//! [`Wrapping`](std::num::Wrapping) element type; callers that want
//! compensated float accumulation want a statistics crate, not this one.

use std::num::Wrapping;
use std::ops::Add;

/// Types that can be totalled: addition plus an additive identity.
///
/// Deliberately smaller than a full numeric tower. Summation needs `+` and
/// a starting value, nothing else, so that is all the bound asks for.
pub trait Summable: Copy + Add<Output = Self> {
    /// The additive identity (`0` for integers, `0.0` for floats).
    const ZERO: Self;
}

macro_rules! impl_summable {
    ($($t:ty => $zero:expr),* $(,)?) => {
        $(impl Summable for $t {
            const ZERO: Self = $zero;
        })*
    };
}

impl_summable! {
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    f32 => 0.0, f64 => 0.0,
}

/// Modular arithmetic: summing `Wrapping<T>` wraps on overflow in every
/// build profile, not just release.
impl<T> Summable for Wrapping<T>
where
    T: Summable,
    Wrapping<T>: Copy + Add<Output = Wrapping<T>>,
{
    const ZERO: Self = Wrapping(T::ZERO);
}

/// Total a slice by folding `+` from [`Summable::ZERO`].
///
/// The empty slice sums to zero. Addition happens left to right, so float
/// results are the IEEE left fold and integer overflow behaves exactly
/// like `+` on that type. The input is only read, never mutated.
///
/// # Examples
/// ```
/// assert_eq!(tally::sum(&[1, 2, 3, 4, 5]), 15);
/// assert_eq!(tally::sum::<i32>(&[]), 0);
/// ```
pub fn sum<T: Summable>(values: &[T]) -> T {
    values.iter().fold(T::ZERO, |total, &value| total + value)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
