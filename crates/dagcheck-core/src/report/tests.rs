#![allow(clippy::expect_used)]

use super::*;
use crate::matrix::parse_matrix;

/// Five-node chain 0 -> 1 -> 2 -> 3 -> 4, weights 0.5, only node 0 has a prior.
const CHAIN5: &str = "\
1.0,0.0,0.5,0.0,0.0,0.0
0.0,0.0,0.0,0.5,0.0,0.0
0.0,0.0,0.0,0.0,0.5,0.0
0.0,0.0,0.0,0.0,0.0,0.5
0.0,0.0,0.0,0.0,0.0,0.0
";

/// [`CHAIN5`] plus the closing edge 4 -> 0.
const CHAIN5_CLOSED: &str = "\
1.0,0.0,0.5,0.0,0.0,0.0
0.0,0.0,0.0,0.5,0.0,0.0
0.0,0.0,0.0,0.0,0.5,0.0
0.0,0.0,0.0,0.0,0.0,0.5
0.0,0.5,0.0,0.0,0.0,0.0
";

fn report_for(text: &str) -> VerificationReport {
    verify(&parse_matrix(text).expect("fixture parses"))
}

// ── chain scenario ──────────────────────────────────────────────────────────

#[test]
fn chain_is_a_valid_dag() {
    let r = report_for(CHAIN5);
    assert_eq!(r.stats.node_count, 5);
    assert_eq!(r.stats.edge_count, 4);
    assert_eq!(r.self_loop_count(), 0);
    assert_eq!(r.ordering_violation_count(), 0);
    assert!(!r.has_cycle);
    assert!(r.cycle.is_none());
    assert!(r.topological_complete);
    assert_eq!(r.topological_order, vec![0, 1, 2, 3, 4]);
    assert_eq!(r.verdict(), Verdict::ValidDag);
    assert!(r.verdicts_agree());
    assert!(r.passes(&VerifyPolicy::default()));
}

#[test]
fn closed_chain_is_cyclic_with_one_violation() {
    let r = report_for(CHAIN5_CLOSED);
    assert!(r.has_cycle);
    assert_eq!(r.cycle, Some(vec![0, 1, 2, 3, 4, 0]));
    assert!(!r.topological_complete);
    assert!(r.topological_order.len() < 5);
    assert_eq!(r.self_loop_count(), 0);
    assert_eq!(
        r.ordering_violations,
        vec![EdgeViolation {
            source: 4,
            target: 0,
            weight: 0.5
        }]
    );
    assert_eq!(r.verdict(), Verdict::Cyclic);
    assert!(r.verdicts_agree());
    assert!(!r.passes(&VerifyPolicy {
        allow_out_of_order: true
    }));
}

// ── acyclic but not index-ordered ───────────────────────────────────────────

#[test]
fn reversed_chain_is_acyclic_but_out_of_order() {
    // 2 -> 1 -> 0: a DAG, but every edge points backwards.
    let r = report_for("0.0,0.0,0.0,0.0\n0.0,0.7,0.0,0.0\n1.0,0.0,0.7,0.0\n");
    assert!(r.is_dag());
    assert_eq!(r.ordering_violation_count(), 2);
    assert_eq!(r.topological_order, vec![2, 1, 0]);
    assert_eq!(r.verdict(), Verdict::OutOfOrder);
    assert!(!r.passes(&VerifyPolicy::default()));
    assert!(r.passes(&VerifyPolicy {
        allow_out_of_order: true
    }));
}

// ── self-loops ──────────────────────────────────────────────────────────────

#[test]
fn self_loop_is_cyclic_and_counted_in_both_scans() {
    let r = report_for("1.0,0.0,0.5,0.0\n0.0,0.0,0.2,0.0\n0.0,0.0,0.0,0.0\n");
    assert_eq!(r.self_loops, vec![1]);
    assert_eq!(r.ordering_violation_count(), 1);
    assert!(r.has_cycle);
    assert_eq!(r.cycle, Some(vec![1, 1]));
    assert!(!r.topological_complete);
    assert_eq!(r.verdict(), Verdict::Cyclic);
}

// ── priors ──────────────────────────────────────────────────────────────────

#[test]
fn bad_priors_are_reported_without_changing_verdict() {
    let r = report_for("1.2,0.0,0.5\n-0.5,0.0,0.0\n");
    assert_eq!(r.prior_violations.len(), 2);
    assert_eq!(r.verdict(), Verdict::ValidDag);
}

// ── edge cases ──────────────────────────────────────────────────────────────

#[test]
fn edgeless_matrix_sorts_every_node() {
    let r = report_for("0.5,0.0,0.0,0.0\n0.5,0.0,0.0,0.0\n0.5,0.0,0.0,0.0\n");
    assert!(!r.has_cycle);
    assert_eq!(r.topological_order.len(), 3);
    assert_eq!(r.stats.sources, vec![0, 1, 2]);
    assert!(r.stats.density.abs() < f64::EPSILON);
}

#[test]
fn single_node_matrix_is_valid() {
    let r = report_for("1.0,0.0\n");
    assert_eq!(r.verdict(), Verdict::ValidDag);
    assert_eq!(r.topological_order, vec![0]);
}

// ── serialization ───────────────────────────────────────────────────────────

#[test]
fn report_serializes_with_snake_case_verdict() {
    let r = report_for(CHAIN5_CLOSED);
    let value = serde_json::to_value(&r).expect("serialize");
    assert_eq!(value["has_cycle"], serde_json::Value::Bool(true));
    assert_eq!(value["stats"]["edge_count"], 5);
    assert_eq!(value["ordering_violations"][0]["source"], 4);
    let verdict = serde_json::to_value(r.verdict()).expect("serialize verdict");
    assert_eq!(verdict, "cyclic");
    let ok = serde_json::to_value(Verdict::OutOfOrder).expect("serialize verdict");
    assert_eq!(ok, "out_of_order");
}
