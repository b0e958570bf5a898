//! Integration tests for `dagcheck order`.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `dagcheck` binary.
fn dagcheck_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("dagcheck");
    path
}

fn fixture(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("../../tests/fixtures");
    path.push(name);
    path
}

fn order(args: &[&str], name: &str) -> Output {
    let path = fixture(name);
    Command::new(dagcheck_bin())
        .arg("order")
        .arg(path.to_str().expect("path"))
        .args(args)
        .output()
        .expect("run dagcheck order")
}

#[test]
fn order_chain_prints_index_order() {
    let out = order(&[], "chain5.csv");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let nodes: Vec<&str> = stdout.lines().collect();
    assert_eq!(nodes, ["0", "1", "2", "3", "4"]);
}

#[test]
fn order_reversed_dag_is_complete() {
    let out = order(&[], "reversed_dag.csv");
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    let nodes: Vec<&str> = stdout.lines().collect();
    assert_eq!(nodes, ["2", "1", "0"]);
}

#[test]
fn order_cycle_exits_1_and_lists_unordered() {
    let out = order(&[], "chain5_cycle.csv");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("unordered nodes: 0, 1, 2, 3, 4"), "stderr: {stderr}");
    assert!(stderr.contains("no topological order"), "stderr: {stderr}");
}

#[test]
fn order_json() {
    let out = order(&["-f", "json"], "self_loop.csv");
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("valid JSON");
    assert_eq!(value["complete"], false);
    assert_eq!(value["order"], serde_json::json!([0, 2]));
    assert_eq!(value["unresolved"], serde_json::json!([1]));
}
