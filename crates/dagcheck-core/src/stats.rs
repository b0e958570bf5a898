/// Summary statistics for a loaded matrix.
use serde::Serialize;

use crate::adjacency::Adjacency;
use crate::matrix::PriorMatrix;

/// Counts and degree/prior summaries gathered from a matrix and its
/// adjacency list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of present edges (self-loops included).
    pub edge_count: usize,
    /// `N * (N - 1)`: the number of distinct ordered pairs without self-loops.
    pub possible_edges: usize,
    /// `edge_count / possible_edges`, or `0.0` when fewer than two nodes.
    pub density: f64,
    /// Nodes with in-degree zero, ascending.
    pub sources: Vec<usize>,
    /// Nodes with out-degree zero, ascending.
    pub sinks: Vec<usize>,
    /// Largest in-degree (0 for an empty graph).
    pub max_in_degree: usize,
    /// Largest out-degree (0 for an empty graph).
    pub max_out_degree: usize,
    /// Smallest prior, `None` for an empty matrix.
    pub prior_min: Option<f64>,
    /// Largest prior, `None` for an empty matrix.
    pub prior_max: Option<f64>,
    /// Mean prior, `None` for an empty matrix.
    pub prior_mean: Option<f64>,
    /// Nodes whose prior is exactly `1.0`.
    pub certain_priors: usize,
}

impl GraphStats {
    /// Computes statistics for `matrix`; `adjacency` must have been built
    /// from the same matrix.
    pub fn compute(matrix: &PriorMatrix, adjacency: &Adjacency) -> Self {
        let node_count = adjacency.node_count();
        let edge_count = adjacency.edge_count();
        let possible_edges = node_count.saturating_mul(node_count.saturating_sub(1));
        #[allow(clippy::cast_precision_loss)]
        let density = if possible_edges == 0 {
            0.0
        } else {
            edge_count as f64 / possible_edges as f64
        };

        let max_in_degree = adjacency.in_degrees().into_iter().max().unwrap_or(0);
        let max_out_degree = (0..node_count)
            .map(|n| adjacency.out_degree(n))
            .max()
            .unwrap_or(0);

        let priors: Vec<f64> = matrix.priors().collect();
        let prior_min = priors.iter().copied().reduce(f64::min);
        let prior_max = priors.iter().copied().reduce(f64::max);
        #[allow(clippy::cast_precision_loss)]
        let prior_mean = if priors.is_empty() {
            None
        } else {
            Some(priors.iter().sum::<f64>() / priors.len() as f64)
        };
        #[allow(clippy::float_cmp)]
        let certain_priors = priors.iter().filter(|&&p| p == 1.0).count();

        Self {
            node_count,
            edge_count,
            possible_edges,
            density,
            sources: adjacency.sources(),
            sinks: adjacency.sinks(),
            max_in_degree,
            max_out_degree,
            prior_min,
            prior_max,
            prior_mean,
            certain_priors,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn chain_statistics() {
        let m = PriorMatrix::from_rows(vec![
            vec![1.0, 0.0, 0.5, 0.0, 0.0],
            vec![0.5, 0.0, 0.0, 0.5, 0.0],
            vec![0.5, 0.0, 0.0, 0.0, 0.5],
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .expect("valid");
        let adj = Adjacency::from_matrix(&m);
        let stats = GraphStats::compute(&m, &adj);

        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.possible_edges, 12);
        assert!((stats.density - 0.25).abs() < 1e-12);
        assert_eq!(stats.sources, vec![0]);
        assert_eq!(stats.sinks, vec![3]);
        assert_eq!(stats.max_in_degree, 1);
        assert_eq!(stats.max_out_degree, 1);
        assert_eq!(stats.prior_min, Some(0.0));
        assert_eq!(stats.prior_max, Some(1.0));
        assert!((stats.prior_mean.expect("mean") - 0.5).abs() < 1e-12);
        assert_eq!(stats.certain_priors, 1);
    }

    #[test]
    fn single_node_has_zero_density() {
        let m = PriorMatrix::from_rows(vec![vec![0.4, 0.0]]).expect("valid");
        let adj = Adjacency::from_matrix(&m);
        let stats = GraphStats::compute(&m, &adj);
        assert_eq!(stats.possible_edges, 0);
        assert!(stats.density.abs() < f64::EPSILON);
    }

    #[test]
    fn empty_matrix_has_no_prior_summary() {
        let m = PriorMatrix::zeros(0);
        let adj = Adjacency::from_matrix(&m);
        let stats = GraphStats::compute(&m, &adj);
        assert_eq!(stats.prior_min, None);
        assert_eq!(stats.prior_mean, None);
        assert_eq!(stats.max_in_degree, 0);
    }
}
