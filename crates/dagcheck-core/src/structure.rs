/// Structural scans over the raw matrix.
///
/// These checks are stricter than acyclicity. A graph can be a perfectly
/// good DAG under some topological order and still break the fixed
/// identity order (`target > source`) if its node indices were not assigned
/// topologically. Callers must report both results separately.
use serde::Serialize;

use crate::matrix::PriorMatrix;

/// A present edge that does not point to a strictly higher node index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeViolation {
    /// Row index.
    pub source: usize,
    /// Target node index.
    pub target: usize,
    /// Cell value (strictly positive).
    pub weight: f64,
}

/// A prior outside the closed interval `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriorViolation {
    /// Row index.
    pub node: usize,
    /// The out-of-range prior.
    pub prior: f64,
}

/// Returns every node `i` whose diagonal cell `(i, i)` holds a positive
/// weight, ascending. Each self-loop appears exactly once.
pub fn self_loops(matrix: &PriorMatrix) -> Vec<usize> {
    (0..matrix.node_count())
        .filter(|&i| matrix.weight(i, i).is_some_and(|w| w > 0.0))
        .collect()
}

/// Returns every present edge with `target <= source`, in row-major order.
///
/// Self-loops are included because a node is not strictly after itself.
pub fn ordering_violations(matrix: &PriorMatrix) -> Vec<EdgeViolation> {
    matrix
        .edges()
        .filter(|e| e.target <= e.source)
        .map(|e| EdgeViolation {
            source: e.source,
            target: e.target,
            weight: e.weight,
        })
        .collect()
}

/// Returns every node whose prior lies outside `[0, 1]`.
pub fn prior_violations(matrix: &PriorMatrix) -> Vec<PriorViolation> {
    matrix
        .priors()
        .enumerate()
        .filter(|&(_, p)| !(0.0..=1.0).contains(&p))
        .map(|(node, prior)| PriorViolation { node, prior })
        .collect()
}
