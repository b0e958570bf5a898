//! Invariant checkers for verification results and generated fixtures.
//!
//! Each checker returns `Err` with a description of the first broken
//! invariant, so tests and the fixture binary can report it verbatim.

use dagcheck_core::{Adjacency, PriorMatrix, VerificationReport};
use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};

/// Verifies that every edge of `matrix` points to a higher node index and
/// that there are no self-loops.
pub fn check_forward_only(matrix: &PriorMatrix) -> Result<(), String> {
    match matrix.edges().find(|e| e.target <= e.source) {
        Some(e) => Err(format!(
            "edge {} -> {} (weight {}) is not forward",
            e.source, e.target, e.weight
        )),
        None => Ok(()),
    }
}

/// Verifies that every prior and edge weight is representable with one
/// decimal place and lies in `[0, 1]`.
pub fn check_cell_ranges(matrix: &PriorMatrix) -> Result<(), String> {
    for (node, prior) in matrix.priors().enumerate() {
        if !(0.0..=1.0).contains(&prior) || !is_tenth(prior) {
            return Err(format!("node {node} has prior {prior}"));
        }
    }
    for e in matrix.edges() {
        if !(0.1..=1.0).contains(&e.weight) || !is_tenth(e.weight) {
            return Err(format!(
                "edge {} -> {} has weight {}",
                e.source, e.target, e.weight
            ));
        }
    }
    Ok(())
}

fn is_tenth(value: f64) -> bool {
    ((value * 10.0).round() - value * 10.0).abs() < 1e-9
}

/// Verifies the internal consistency of a [`VerificationReport`]:
/// - DFS and Kahn agree on acyclicity
/// - a cycle witness is a closed walk over real edges
/// - a complete order is a permutation that respects every edge
pub fn check_report(report: &VerificationReport, adjacency: &Adjacency) -> Result<(), String> {
    if !report.verdicts_agree() {
        return Err(format!(
            "dfs says has_cycle={}, kahn says complete={}",
            report.has_cycle, report.topological_complete
        ));
    }
    if let Some(cycle) = &report.cycle {
        check_closed_walk(adjacency, cycle)?;
    }
    if report.topological_complete {
        check_order(adjacency, &report.topological_order)?;
    }
    Ok(())
}

/// Verifies that `cycle` is non-empty, closed, and follows real edges.
pub fn check_closed_walk(adjacency: &Adjacency, cycle: &[usize]) -> Result<(), String> {
    if cycle.len() < 2 || cycle.first() != cycle.last() {
        return Err(format!("cycle {cycle:?} is not closed"));
    }
    for pair in cycle.windows(2) {
        let &[from, to] = pair else {
            continue;
        };
        if !adjacency.successors(from).contains(&to) {
            return Err(format!("cycle step {from} -> {to} is not an edge"));
        }
    }
    Ok(())
}

/// Verifies that `order` lists every node once and every edge goes from an
/// earlier to a later position.
pub fn check_order(adjacency: &Adjacency, order: &[usize]) -> Result<(), String> {
    let n = adjacency.node_count();
    if order.len() != n {
        return Err(format!("order has {} of {n} nodes", order.len()));
    }
    let mut position = vec![usize::MAX; n];
    for (pos, &node) in order.iter().enumerate() {
        match position.get_mut(node) {
            Some(slot) if *slot == usize::MAX => *slot = pos,
            Some(_) => return Err(format!("node {node} appears twice in order")),
            None => return Err(format!("node {node} is out of range")),
        }
    }
    for source in 0..n {
        for &target in adjacency.successors(source) {
            let before = position.get(source).copied().unwrap_or(usize::MAX);
            let after = position.get(target).copied().unwrap_or(usize::MAX);
            if before >= after {
                return Err(format!("edge {source} -> {target} goes backward in order"));
            }
        }
    }
    Ok(())
}

/// Verifies that `petgraph` reaches the same acyclicity verdict.
pub fn check_against_petgraph(
    report: &VerificationReport,
    adjacency: &Adjacency,
) -> Result<(), String> {
    let graph = to_petgraph(adjacency);
    let cyclic = is_cyclic_directed(&graph);
    if cyclic == report.has_cycle {
        Ok(())
    } else {
        Err(format!(
            "petgraph says cyclic={cyclic}, dfs says has_cycle={}",
            report.has_cycle
        ))
    }
}

/// Copies `adjacency` into a `petgraph` graph with matching node indices.
pub fn to_petgraph(adjacency: &Adjacency) -> DiGraph<(), ()> {
    let n = adjacency.node_count();
    let mut graph = DiGraph::with_capacity(n, adjacency.edge_count());
    for _ in 0..n {
        graph.add_node(());
    }
    for source in 0..n {
        for &target in adjacency.successors(source) {
            graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
        }
    }
    graph
}
