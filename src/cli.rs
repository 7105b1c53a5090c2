// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions and report rendering for the tally binary.
//!
//! The binary does one thing: generate a sequence and print its total.
//! Rendering is split from `main` so both output shapes are unit-testable
//! without spawning a process. The plain-text shape is one `Sum:` line
//! followed by one value per line; `--json` swaps in a single JSON object.

use clap::Parser;
use serde::Serialize;

use tally::{seeded_rng, sum, SizedGenerator};

/// Command-line options.
#[derive(Parser)]
#[command(
    name = "tally",
    about = "Generate a pseudo-random integer sequence and print its sum",
    version
)]
pub struct Cli {
    /// How many values to generate
    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    /// Seed for reproducible output (omit for a fresh sequence each run)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Emit the report as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

/// Everything one run produced, ready for either output shape.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub values: Vec<i32>,
    pub sum: i64,
}

/// Generate the sequence the options describe and total it.
///
/// The total is accumulated in `i64`: any realistic count of full-range
/// `i32` draws fits without overflow, so the printed sum is the true
/// arithmetic total rather than a wrapped one.
pub fn build_report(cli: &Cli) -> SequenceReport {
    let generator = SizedGenerator::new(cli.count);

    let values = match cli.seed {
        Some(seed) => {
            log::debug!("seeding generator with {}", seed);
            generator.generate_with(&mut seeded_rng(seed))
        }
        None => {
            log::debug!("no seed given, drawing from thread-local entropy");
            generator.generate()
        }
    };
    log::info!("generated {} values", values.len());

    let widened: Vec<i64> = values.iter().copied().map(i64::from).collect();
    let total = sum(&widened);

    SequenceReport {
        count: cli.count,
        seed: cli.seed,
        values,
        sum: total,
    }
}

/// Render the plain-text report: the sum first, then one value per line.
pub fn render_text(report: &SequenceReport) -> String {
    let mut out = format!("Sum: {}\n", report.sum);
    for value in &report.values {
        out.push_str(&value.to_string());
        out.push('\n');
    }
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &SequenceReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
