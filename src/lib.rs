// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Random sequence generation and summation.
//!
//! This crate produces sequences of uniformly distributed values and totals
//! them. Generation is generic over the RNG so callers choose between a
//! thread-local source for convenience and a seeded one for reproducibility.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │    random.rs     │────▶│      sum.rs      │
//! │ (random_sequence,│     │ (sum, Summable)  │
//! │  SizedGenerator) │     │                  │
//! └──────────────────┘     └──────────────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌────────────────────────────────────────────┐
//! │                contracts.rs                │
//! │       (debug-build sanity assertions)      │
//! └────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use tally::{seeded_rng, sum, SizedGenerator};
//!
//! let generator = SizedGenerator::new(5);
//! let values: Vec<i32> = generator.generate_with(&mut seeded_rng(42));
//! assert_eq!(values.len(), 5);
//!
//! // Widen before totalling so the sum can never overflow.
//! let widened: Vec<i64> = values.iter().copied().map(i64::from).collect();
//! assert_eq!(sum(&widened), widened.iter().sum::<i64>());
//! ```

// Module declarations
pub mod contracts;
mod random;
mod sum;

// Re-exports for public API
pub use random::{random_sequence, seeded_rng, SizedGenerator};
pub use sum::{sum, Summable};
