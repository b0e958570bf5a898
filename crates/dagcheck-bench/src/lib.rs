//! Seeded DAG fixture generator and benchmark utilities for dagcheck.
//!
//! This crate provides deterministic generation of prior-weighted adjacency
//! matrices for benchmarking and property-based testing of `dagcheck-core`.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_matrix};

/// Returns the default output path of the `gen-fixture` binary.
///
/// The file lives under `target/bench-fixtures/` so it is gitignored and
/// shared between the generator binary and the benchmark harness.
pub fn default_fixture_path() -> PathBuf {
    fixtures_dir().join("fixture-800.csv")
}

fn fixtures_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
}
