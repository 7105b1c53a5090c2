//! End-to-end pipeline tests: generate a sequence, total it, print it.
//!
//! The library half runs the flow in-process; the binary half spawns the
//! built executable and checks the exact bytes it writes.

mod common;

use common::{reference_total, seeded_sequence, widen};
use std::process::Command;
use tally::{random_sequence, seeded_rng, sum, SizedGenerator};

// ============================================================================
// LIBRARY PIPELINE
// ============================================================================

#[test]
fn default_sized_pipeline_produces_ten_values() {
    let generator = SizedGenerator::new(10);
    let values: Vec<i32> = generator.generate();
    assert_eq!(values.len(), 10);
}

#[test]
fn pipeline_total_matches_reference() {
    let values = seeded_sequence(100, 42);
    assert_eq!(sum(&widen(&values)), reference_total(&values));
}

#[test]
fn sequences_from_distinct_seeds_differ() {
    assert_ne!(seeded_sequence(16, 1), seeded_sequence(16, 2));
}

#[test]
fn generator_is_reusable_across_runs() {
    let generator = SizedGenerator::new(12);
    let first: Vec<i32> = generator.generate_with(&mut seeded_rng(5));
    let second: Vec<i32> = generator.generate_with(&mut seeded_rng(5));

    assert_eq!(generator.count(), 12);
    assert_eq!(first, second);
}

#[test]
fn float_pipeline_stays_in_unit_interval() {
    let values: Vec<f64> = random_sequence(&mut seeded_rng(5), 64);
    assert!(values.iter().all(|v| (0.0..1.0).contains(v)));
}

// ============================================================================
// BINARY PIPELINE
// ============================================================================

/// Run the tally binary with the given arguments.
fn run_tally(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(args)
        .output()
        .expect("failed to run tally")
}

#[test]
fn default_run_exits_zero_with_ten_values() {
    let output = run_tally(&["--seed", "3"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.lines().count(),
        11,
        "one Sum line plus the default ten values"
    );
}

#[test]
fn invalid_count_fails_with_a_usage_error() {
    let output = run_tally(&["--count", "not-a-number"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--count"), "stderr names the offending flag");
    assert!(output.stdout.is_empty(), "usage errors write nothing to stdout");
}

#[test]
fn text_output_is_sum_line_then_one_value_per_line() {
    let output = run_tally(&["--count", "5", "--seed", "42"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 6, "one Sum line plus five values");

    let total: i64 = lines[0]
        .strip_prefix("Sum: ")
        .expect("first line starts with 'Sum: '")
        .parse()
        .expect("total is numeric");
    let values: Vec<i64> = lines[1..]
        .iter()
        .map(|line| line.parse().expect("value lines are numeric"))
        .collect();

    assert_eq!(values.iter().sum::<i64>(), total);
}

#[test]
fn seeded_runs_are_reproducible_across_processes() {
    let first = run_tally(&["--count", "8", "--seed", "7"]);
    let second = run_tally(&["--count", "8", "--seed", "7"]);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn seeded_output_matches_library_generation() {
    let output = run_tally(&["--count", "6", "--seed", "99"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    let printed: Vec<i32> = stdout
        .lines()
        .skip(1)
        .map(|line| line.parse().expect("value lines are numeric"))
        .collect();
    assert_eq!(printed, seeded_sequence(6, 99));
}

#[test]
fn zero_count_run_prints_only_the_sum_line() {
    let output = run_tally(&["--count", "0", "--seed", "1"]);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Sum: 0\n");
}

#[test]
fn json_output_carries_count_seed_values_and_sum() {
    let output = run_tally(&["--count", "4", "--seed", "11", "--json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(parsed["count"], 4);
    assert_eq!(parsed["seed"], 11);
    assert_eq!(parsed["values"].as_array().map(Vec::len), Some(4));

    let total: i64 = parsed["values"]
        .as_array()
        .expect("values is an array")
        .iter()
        .map(|v| v.as_i64().expect("values are integers"))
        .sum();
    assert_eq!(parsed["sum"], total);
}

#[test]
fn unseeded_json_output_omits_the_seed_field() {
    let output = run_tally(&["--count", "3", "--json"]);
    let parsed: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert!(parsed.get("seed").is_none());
}
