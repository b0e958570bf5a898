//! Perturbations that turn a valid DAG into a negative fixture.

use dagcheck_core::PriorMatrix;
use rand::rngs::StdRng;
use rand::seq::{SliceRandom, index};

/// Adds the reverse of `count` randomly chosen existing edges, creating at
/// least one 2-cycle. A matrix with no edges gets a self-loop on node 0
/// instead.
pub fn inject_cycles(matrix: &mut PriorMatrix, count: usize, rng: &mut StdRng) {
    let forward: Vec<(usize, usize, f64)> = matrix
        .edges()
        .filter(|e| e.source != e.target)
        .map(|e| (e.source, e.target, e.weight))
        .collect();

    if forward.is_empty() {
        if let Some(cell) = matrix.weight_mut(0, 0) {
            *cell = 0.5;
        }
        return;
    }

    let amount = count.min(forward.len());
    for i in index::sample(rng, forward.len(), amount) {
        let Some(&(source, target, weight)) = forward.get(i) else {
            continue;
        };
        if let Some(cell) = matrix.weight_mut(target, source) {
            *cell = weight;
        }
    }
}

/// Relabels nodes with a random permutation.
///
/// Edges, weights and priors travel with their nodes, so cycle structure is
/// unchanged. If the shuffle happens to keep every edge forward, the
/// permutation is mirrored so that every edge points backward instead.
pub fn permute_nodes(matrix: &PriorMatrix, rng: &mut StdRng) -> PriorMatrix {
    let n = matrix.node_count();
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);

    let label = |node: usize| perm.get(node).copied().unwrap_or(node);
    let still_ordered = matrix
        .edges()
        .all(|e| label(e.source) < label(e.target));
    if still_ordered {
        for p in &mut perm {
            *p = n - 1 - *p;
        }
    }
    relabel(matrix, &perm)
}

/// Builds the matrix in which old node `i` becomes node `perm[i]`.
pub fn relabel(matrix: &PriorMatrix, perm: &[usize]) -> PriorMatrix {
    let n = matrix.node_count();
    let mut out = PriorMatrix::zeros(n);
    let label = |node: usize| perm.get(node).copied().unwrap_or(node);

    for node in 0..n {
        if let (Some(prior), Some(cell)) = (matrix.prior(node), out.prior_mut(label(node))) {
            *cell = prior;
        }
    }
    for edge in matrix.edges() {
        if let Some(cell) = out.weight_mut(label(edge.source), label(edge.target)) {
            *cell = edge.weight;
        }
    }
    out
}
