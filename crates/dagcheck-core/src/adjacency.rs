/// Adjacency-list view of a prior matrix.
///
/// Only edge presence survives the conversion: weights are dropped and the
/// prior column is ignored. Successors are stored per source node in the
/// order the edges were discovered, which for [`Adjacency::from_matrix`] is
/// ascending target index.
use crate::matrix::PriorMatrix;

/// Errors raised when building an [`Adjacency`] from explicit edge pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint is not a valid node index.
    #[error("edge {from} -> {to} references node {node}, but the graph has {node_count} nodes")]
    NodeOutOfRange {
        /// Edge source as given.
        from: usize,
        /// Edge target as given.
        to: usize,
        /// The endpoint that is out of range.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

/// Directed graph over nodes `0..node_count` as per-node successor lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency {
    successors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Adjacency {
    /// Builds the adjacency list from every cell in columns `1..=N` whose
    /// weight is strictly positive.
    pub fn from_matrix(matrix: &PriorMatrix) -> Self {
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); matrix.node_count()];
        let mut edge_count = 0usize;
        for edge in matrix.edges() {
            if let Some(list) = successors.get_mut(edge.source) {
                list.push(edge.target);
                edge_count += 1;
            }
        }
        tracing::debug!(
            nodes = successors.len(),
            edges = edge_count,
            "built adjacency list"
        );
        Self {
            successors,
            edge_count,
        }
    }

    /// Builds a graph from explicit `(source, target)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeOutOfRange`] if any endpoint is
    /// `>= node_count`.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); node_count];
        for &(from, to) in edges {
            let out_of_range = [from, to].into_iter().find(|&n| n >= node_count);
            if let Some(node) = out_of_range {
                return Err(GraphError::NodeOutOfRange {
                    from,
                    to,
                    node,
                    node_count,
                });
            }
            if let Some(list) = successors.get_mut(from) {
                list.push(to);
            }
        }
        Ok(Self {
            successors,
            edge_count: edges.len(),
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.successors.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Successors of `node`; empty for out-of-range indices.
    pub fn successors(&self, node: usize) -> &[usize] {
        self.successors.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Out-degree of `node`; zero for out-of-range indices.
    pub fn out_degree(&self, node: usize) -> usize {
        self.successors(node).len()
    }

    /// In-degree of every node, indexed by node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut in_degree = vec![0usize; self.node_count()];
        for targets in &self.successors {
            for &t in targets {
                if let Some(d) = in_degree.get_mut(t) {
                    *d += 1;
                }
            }
        }
        in_degree
    }

    /// Nodes with no incoming edges, ascending.
    pub fn sources(&self) -> Vec<usize> {
        self.in_degrees()
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d == 0)
            .map(|(n, _)| n)
            .collect()
    }

    /// Nodes with no outgoing edges, ascending.
    pub fn sinks(&self) -> Vec<usize> {
        self.successors
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(n, _)| n)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn from_matrix_skips_priors_and_keeps_target_order() {
        let m = PriorMatrix::from_rows(vec![
            vec![1.0, 0.0, 0.3, 0.6],
            vec![0.0, 0.0, 0.0, 0.9],
            vec![0.7, 0.0, 0.0, 0.0],
        ])
        .expect("valid");
        let adj = Adjacency::from_matrix(&m);
        assert_eq!(adj.node_count(), 3);
        assert_eq!(adj.edge_count(), 3);
        assert_eq!(adj.successors(0), &[1, 2]);
        assert_eq!(adj.successors(1), &[2]);
        assert!(adj.successors(2).is_empty());
    }

    #[test]
    fn from_matrix_with_only_priors_has_no_edges() {
        let m = PriorMatrix::from_rows(vec![vec![1.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]])
            .expect("valid");
        let adj = Adjacency::from_matrix(&m);
        assert_eq!(adj.edge_count(), 0);
        assert_eq!(adj.sources(), vec![0, 1]);
        assert_eq!(adj.sinks(), vec![0, 1]);
    }

    #[test]
    fn from_edges_rejects_out_of_range_endpoint() {
        let err = Adjacency::from_edges(3, &[(0, 1), (1, 3)]).expect_err("must fail");
        assert_eq!(
            err,
            GraphError::NodeOutOfRange {
                from: 1,
                to: 3,
                node: 3,
                node_count: 3
            }
        );
    }

    #[test]
    fn degrees_sources_and_sinks() {
        let adj = Adjacency::from_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]).expect("valid");
        assert_eq!(adj.in_degrees(), vec![0, 1, 1, 2]);
        assert_eq!(adj.out_degree(0), 2);
        assert_eq!(adj.out_degree(9), 0);
        assert_eq!(adj.sources(), vec![0]);
        assert_eq!(adj.sinks(), vec![3]);
    }

    #[test]
    fn successors_of_unknown_node_is_empty() {
        let adj = Adjacency::from_edges(1, &[]).expect("valid");
        assert!(adj.successors(7).is_empty());
    }
}
