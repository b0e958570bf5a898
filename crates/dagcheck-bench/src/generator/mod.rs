//! Prior-weighted DAG generator.
//!
//! Produces [`PriorMatrix`] instances whose nodes are split into contiguous
//! bands. Every generated edge points from a lower to a higher node index,
//! so an unperturbed matrix is always a valid, index-ordered DAG. Cycle
//! injection and node permutation are opt-in perturbations used to build
//! negative fixtures.

pub mod perturb;
pub mod priors;
pub mod topology;

use dagcheck_core::PriorMatrix;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the DAG generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of nodes.
    pub nodes: usize,
    /// Number of contiguous bands the nodes are split into. The first node
    /// of each band is a root with prior 1.0.
    pub bands: usize,
    /// Edges per node into later nodes of the same band.
    pub intra_band_edges: usize,
    /// Edges per node into nodes of later bands.
    pub cross_band_edges: usize,
    /// Inclusive range edge weights are drawn from, before rounding to one
    /// decimal place.
    pub weight_range: (f64, f64),
    /// Number of reversed edges to add; any value above zero makes the
    /// matrix cyclic.
    pub inject_cycles: usize,
    /// Relabel nodes with a random permutation so edges no longer follow
    /// index order.
    pub permute_nodes: bool,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 nodes, ~200 edges.
    Small,
    /// 200 nodes, ~900 edges.
    Medium,
    /// 800 nodes, ~3700 edges; the shape of the reference fixture.
    Fixture,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (nodes, bands) = match self {
            SizeTier::Small => (50, 5),
            SizeTier::Medium => (200, 6),
            SizeTier::Fixture => (800, 8),
        };
        GeneratorConfig {
            seed,
            nodes,
            bands,
            intra_band_edges: 2,
            cross_band_edges: 3,
            weight_range: (0.2, 0.9),
            inject_cycles: 0,
            permute_nodes: false,
        }
    }

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Fixture => "800",
        }
    }
}

/// Generates a matrix from `config`.
///
/// The same configuration always yields the same matrix.
pub fn generate_matrix(config: &GeneratorConfig) -> PriorMatrix {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut matrix = PriorMatrix::zeros(config.nodes);

    let bands = topology::band_bounds(config.nodes, config.bands);
    priors::assign_priors(&mut matrix, &bands);
    topology::add_forward_edges(&mut matrix, &bands, config, &mut rng);

    if config.inject_cycles > 0 {
        perturb::inject_cycles(&mut matrix, config.inject_cycles, &mut rng);
    }
    if config.permute_nodes {
        matrix = perturb::permute_nodes(&matrix, &mut rng);
    }
    matrix
}

/// Rounds `value` to one decimal place, the precision of the CSV format.
pub(crate) fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
