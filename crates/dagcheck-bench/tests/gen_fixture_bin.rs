//! Integration tests for the `gen-fixture` binary.
#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::process::Command;

use dagcheck_core::{Verdict, parse_matrix, verify};

/// Path to the compiled `gen-fixture` binary.
fn gen_fixture_bin() -> PathBuf {
    let mut path = std::env::current_exe().expect("current exe");
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push("gen-fixture");
    path
}

#[test]
fn writes_small_fixture_to_stdout() {
    let out = Command::new(gen_fixture_bin())
        .args(["-", "--tier", "small", "--seed", "9"])
        .output()
        .expect("run gen-fixture");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = String::from_utf8(out.stdout).expect("utf-8");
    let matrix = parse_matrix(&text).expect("parses");
    assert_eq!(matrix.node_count(), 50);
    assert_eq!(verify(&matrix).verdict(), Verdict::ValidDag);
}

#[test]
fn writes_cyclic_fixture_to_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nested").join("cyclic.csv");
    let out = Command::new(gen_fixture_bin())
        .arg(path.to_str().expect("path"))
        .args(["--tier", "small", "--cycles", "1", "--nodes", "30"])
        .output()
        .expect("run gen-fixture");
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let text = std::fs::read_to_string(&path).expect("fixture written");
    let matrix = parse_matrix(&text).expect("parses");
    assert_eq!(matrix.node_count(), 30);
    assert_eq!(verify(&matrix).verdict(), Verdict::Cyclic);
}

#[test]
fn oversized_node_count_is_rejected() {
    let out = Command::new(gen_fixture_bin())
        .args(["-", "--nodes", "18446744073709551615"])
        .output()
        .expect("run gen-fixture");
    assert_eq!(out.status.code(), Some(2), "clap usage errors exit 2");
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--nodes"), "stderr: {stderr}");
}
