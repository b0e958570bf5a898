/// Topological feasibility check using Kahn's algorithm.
///
/// Kahn's algorithm computes an in-degree table, seeds a FIFO queue with all
/// zero-in-degree nodes, then repeatedly removes a node from the queue,
/// appends it to the output and decrements the in-degree of each successor.
/// Any successor whose in-degree falls to zero joins the queue.
///
/// If the queue runs dry before every node was emitted, the remaining nodes
/// either lie on a cycle or are reachable only through one. The graph is a
/// DAG exactly when the emitted order covers every node.
use std::collections::VecDeque;

use serde::Serialize;

use crate::adjacency::Adjacency;

/// Result of [`kahn_order`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalOrder {
    /// Nodes in the order they were emitted.
    pub order: Vec<usize>,
    /// `true` when `order` contains every node of the graph.
    pub complete: bool,
}

impl TopologicalOrder {
    /// Nodes that were never emitted, ascending.
    ///
    /// `node_count` must be the node count of the graph the order was
    /// computed for.
    pub fn unresolved(&self, node_count: usize) -> Vec<usize> {
        let mut emitted = vec![false; node_count];
        for &n in &self.order {
            if let Some(e) = emitted.get_mut(n) {
                *e = true;
            }
        }
        emitted
            .iter()
            .enumerate()
            .filter(|&(_, &e)| !e)
            .map(|(n, _)| n)
            .collect()
    }
}

/// Runs Kahn's algorithm over `adjacency`.
///
/// The queue is seeded in ascending node order and successors are visited in
/// adjacency order, so the result is deterministic for a given input.
pub fn kahn_order(adjacency: &Adjacency) -> TopologicalOrder {
    let n = adjacency.node_count();
    let mut in_degree = adjacency.in_degrees();

    let mut queue: VecDeque<usize> = in_degree
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d == 0)
        .map(|(node, _)| node)
        .collect();

    let mut order: Vec<usize> = Vec::with_capacity(n);

    while let Some(node) = queue.pop_front() {
        order.push(node);
        for &succ in adjacency.successors(node) {
            if let Some(deg) = in_degree.get_mut(succ) {
                *deg = deg.saturating_sub(1);
                if *deg == 0 {
                    queue.push_back(succ);
                }
            }
        }
    }

    let complete = order.len() == n;
    tracing::debug!(emitted = order.len(), nodes = n, complete, "kahn sort finished");
    TopologicalOrder { order, complete }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn graph(n: usize, edges: &[(usize, usize)]) -> Adjacency {
        Adjacency::from_edges(n, edges).expect("valid edges")
    }

    #[test]
    fn edgeless_graph_emits_all_nodes_in_index_order() {
        let topo = kahn_order(&graph(4, &[]));
        assert!(topo.complete);
        assert_eq!(topo.order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_graph_is_trivially_complete() {
        let topo = kahn_order(&graph(0, &[]));
        assert!(topo.complete);
        assert!(topo.order.is_empty());
    }

    #[test]
    fn single_backward_edge_still_sorts() {
        let topo = kahn_order(&graph(2, &[(1, 0)]));
        assert!(topo.complete);
        assert_eq!(topo.order, vec![1, 0]);
    }

    #[test]
    fn chain_sorts_in_chain_order() {
        let topo = kahn_order(&graph(5, &[(0, 1), (1, 2), (2, 3), (3, 4)]));
        assert!(topo.complete);
        assert_eq!(topo.order, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn two_cycle_leaves_both_nodes_unresolved() {
        let topo = kahn_order(&graph(3, &[(0, 1), (1, 0)]));
        assert!(!topo.complete);
        assert_eq!(topo.order, vec![2]);
        assert_eq!(topo.unresolved(3), vec![0, 1]);
    }

    #[test]
    fn nodes_downstream_of_a_cycle_are_unresolved() {
        // 0 <-> 1 feeds 2, which cannot be emitted either.
        let topo = kahn_order(&graph(4, &[(0, 1), (1, 0), (1, 2), (3, 2)]));
        assert!(!topo.complete);
        assert_eq!(topo.order, vec![3]);
        assert_eq!(topo.unresolved(4), vec![0, 1, 2]);
    }

    #[test]
    fn self_loop_blocks_its_node() {
        let topo = kahn_order(&graph(2, &[(1, 1)]));
        assert!(!topo.complete);
        assert_eq!(topo.unresolved(2), vec![1]);
    }

    #[test]
    fn complete_order_respects_every_edge() {
        let edges = [(4, 2), (2, 0), (4, 1), (1, 0), (3, 4)];
        let topo = kahn_order(&graph(5, &edges));
        assert!(topo.complete);
        let pos = |n: usize| topo.order.iter().position(|&x| x == n).expect("emitted");
        for (s, t) in edges {
            assert!(pos(s) < pos(t), "{s} must precede {t} in {:?}", topo.order);
        }
    }
}
