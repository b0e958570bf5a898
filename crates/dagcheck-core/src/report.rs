/// End-to-end verification of a loaded matrix.
///
/// [`verify`] runs every check in a fixed order and never stops early: a
/// self-loop, a backward edge or a cycle is recorded in the
/// [`VerificationReport`] and the remaining checks still run. Only parsing
/// can abort a run, and that happens before a [`PriorMatrix`] exists.
use std::time::Instant;

use serde::Serialize;

use crate::adjacency::Adjacency;
use crate::cycles::find_cycle;
use crate::matrix::PriorMatrix;
use crate::stats::GraphStats;
use crate::structure::{
    EdgeViolation, PriorViolation, ordering_violations, prior_violations, self_loops,
};
use crate::topo::kahn_order;

// ---------------------------------------------------------------------------
// Verdict and policy
// ---------------------------------------------------------------------------

/// Overall classification of a verified matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Acyclic, and every edge points to a higher node index.
    ValidDag,
    /// Acyclic, but at least one edge points to a lower or equal index.
    OutOfOrder,
    /// At least one directed cycle (self-loops included).
    Cyclic,
}

impl Verdict {
    /// Short human-readable description.
    pub fn describe(self) -> &'static str {
        match self {
            Self::ValidDag => "valid DAG",
            Self::OutOfOrder => "acyclic, but not in forward index order",
            Self::Cyclic => "not a DAG: contains cycles",
        }
    }
}

/// Which verdicts a caller is willing to accept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerifyPolicy {
    /// Accept [`Verdict::OutOfOrder`] in addition to [`Verdict::ValidDag`].
    pub allow_out_of_order: bool,
}

// ---------------------------------------------------------------------------
// VerificationReport
// ---------------------------------------------------------------------------

/// Every result produced by [`verify`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    /// Counts, density, degree and prior summaries.
    pub stats: GraphStats,
    /// Nodes with a positive diagonal weight.
    pub self_loops: Vec<usize>,
    /// Edges whose target index is not greater than their source index.
    pub ordering_violations: Vec<EdgeViolation>,
    /// Priors outside `[0, 1]`. Informational only.
    pub prior_violations: Vec<PriorViolation>,
    /// Three-colour DFS result.
    pub has_cycle: bool,
    /// One closed cycle found by the DFS, when `has_cycle` is set.
    pub cycle: Option<Vec<usize>>,
    /// Nodes emitted by Kahn's algorithm, in order.
    pub topological_order: Vec<usize>,
    /// `true` when `topological_order` covers every node.
    pub topological_complete: bool,
}

impl VerificationReport {
    /// Number of self-loops.
    pub fn self_loop_count(&self) -> usize {
        self.self_loops.len()
    }

    /// Number of ordering violations.
    pub fn ordering_violation_count(&self) -> usize {
        self.ordering_violations.len()
    }

    /// `true` when the graph admits a topological order.
    pub fn is_dag(&self) -> bool {
        !self.has_cycle && self.topological_complete
    }

    /// `true` when no edge points to a lower or equal index.
    pub fn is_index_ordered(&self) -> bool {
        self.ordering_violations.is_empty()
    }

    /// `true` when the DFS and Kahn verdicts agree, i.e. a cycle was found
    /// exactly when the topological order is incomplete. A `false` here is a
    /// bug in one of the two algorithms, never a property of the input.
    pub fn verdicts_agree(&self) -> bool {
        self.has_cycle != self.topological_complete
    }

    /// Classifies the report.
    pub fn verdict(&self) -> Verdict {
        if !self.is_dag() {
            Verdict::Cyclic
        } else if !self.is_index_ordered() {
            Verdict::OutOfOrder
        } else {
            Verdict::ValidDag
        }
    }

    /// Returns `true` if the verdict is acceptable under `policy`.
    pub fn passes(&self, policy: &VerifyPolicy) -> bool {
        match self.verdict() {
            Verdict::ValidDag => true,
            Verdict::OutOfOrder => policy.allow_out_of_order,
            Verdict::Cyclic => false,
        }
    }
}

// ---------------------------------------------------------------------------
// verify
// ---------------------------------------------------------------------------

/// Runs every check against `matrix`.
///
/// Order: adjacency build, statistics, self-loop scan, ordering scan, prior
/// scan, cycle detection, Kahn sort.
pub fn verify(matrix: &PriorMatrix) -> VerificationReport {
    let started = Instant::now();

    let adjacency = Adjacency::from_matrix(matrix);
    let stats = GraphStats::compute(matrix, &adjacency);

    let self_loops = self_loops(matrix);
    let ordering_violations = ordering_violations(matrix);
    let prior_violations = prior_violations(matrix);

    let cycle = find_cycle(&adjacency);
    let topo = kahn_order(&adjacency);

    let report = VerificationReport {
        stats,
        self_loops,
        ordering_violations,
        prior_violations,
        has_cycle: cycle.is_some(),
        cycle,
        topological_order: topo.order,
        topological_complete: topo.complete,
    };

    if !report.verdicts_agree() {
        tracing::error!(
            has_cycle = report.has_cycle,
            topological_complete = report.topological_complete,
            "cycle detector and topological sort disagree"
        );
    }
    tracing::debug!(
        elapsed_us = started.elapsed().as_micros(),
        verdict = ?report.verdict(),
        "verification finished"
    );
    report
}

#[cfg(test)]
mod tests;
