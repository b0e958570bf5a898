//! Writes a seeded CSV fixture.
//!
//! With no arguments, generates the 800-node tier with seed 42 into
//! `target/bench-fixtures/fixture-800.csv`. Pass `-` as the output to write
//! to stdout instead.

use std::error::Error;
use std::fs;
use std::io::{BufWriter, Write as _};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dagcheck_bench::correctness::check_forward_only;
use dagcheck_bench::{SizeTier, default_fixture_path, generate_matrix};

/// Largest `--nodes` accepted; the dense matrix holds `N * (N + 1)` cells.
const MAX_NODES: u64 = 10_000;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Tier {
    Small,
    Medium,
    Fixture,
}

impl From<Tier> for SizeTier {
    fn from(t: Tier) -> Self {
        match t {
            Tier::Small => SizeTier::Small,
            Tier::Medium => SizeTier::Medium,
            Tier::Fixture => SizeTier::Fixture,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "gen-fixture", about = "Generate a seeded DAG matrix fixture")]
struct Args {
    /// Output path, or `-` for stdout.
    #[arg(value_name = "OUT")]
    out: Option<String>,
    /// RNG seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Size tier.
    #[arg(long, value_enum, default_value = "fixture")]
    tier: Tier,
    /// Override the node count of the tier.
    #[arg(long, value_parser = clap::value_parser!(u64).range(..=MAX_NODES))]
    nodes: Option<u64>,
    /// Number of reversed edges to inject (makes the matrix cyclic).
    #[arg(long, default_value_t = 0)]
    cycles: usize,
    /// Relabel nodes so edges no longer follow index order.
    #[arg(long)]
    permute: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let mut config = SizeTier::from(args.tier).config(args.seed);
    if let Some(nodes) = args.nodes {
        config.nodes = usize::try_from(nodes)?;
    }
    config.inject_cycles = args.cycles;
    config.permute_nodes = args.permute;

    let matrix = generate_matrix(&config);
    if config.inject_cycles == 0 && !config.permute_nodes {
        check_forward_only(&matrix)?;
    }
    let edge_count = matrix.edges().count();
    eprintln!(
        "Generated {} nodes, {edge_count} edges (seed {})",
        matrix.node_count(),
        config.seed
    );

    match args.out.as_deref() {
        Some("-") => {
            let stdout = std::io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            matrix.write_csv(&mut out)?;
            out.flush()?;
        }
        other => {
            let path = other.map_or_else(default_fixture_path, PathBuf::from);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut out = BufWriter::new(fs::File::create(&path)?);
            matrix.write_csv(&mut out)?;
            out.flush()?;
            eprintln!("Wrote {}", path.display());
        }
    }
    Ok(())
}
