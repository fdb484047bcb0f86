use crate::cli::support::{graphwalk, sample_edges, stdout_lines};
use predicates::prelude::*;
use tempfile::tempdir;

fn traverse(order: &str) -> Vec<String> {
    let output = graphwalk()
        .args(["--quiet", "traverse", "1", "--order", order])
        .args(sample_edges())
        .output()
        .unwrap();
    assert!(output.status.success());
    stdout_lines(&output.stdout)
}

#[test]
fn test_traverse_bft_order() {
    assert_eq!(traverse("bft"), ["1", "2", "3", "4", "5", "6", "7"]);
}

#[test]
fn test_traverse_dft_order() {
    assert_eq!(traverse("dft"), ["1", "2", "4", "7", "6", "3", "5"]);
}

#[test]
fn test_traverse_dft_recursive_order() {
    assert_eq!(traverse("dft-recursive"), ["1", "2", "3", "5", "4", "6", "7"]);
}

#[test]
fn test_traverse_defaults_to_bft_with_header() {
    graphwalk()
        .args(["traverse", "1"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("bft from 1:"));
}

#[test]
fn test_traverse_unknown_order_exit_code_2() {
    graphwalk()
        .args(["traverse", "1", "--order", "sideways"])
        .args(sample_edges())
        .assert()
        .code(2);
}

#[test]
fn test_traverse_isolated_vertex() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    std::fs::write(&graph, r#"{"vertices": [1, 2, 9], "edges": [[1, 2]]}"#).unwrap();

    let output = graphwalk()
        .args(["--quiet", "traverse", "9", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output.stdout), ["9"]);
}

#[test]
fn test_traverse_json_output() {
    let output = graphwalk()
        .args(["--format", "json", "traverse", "1", "--order", "dft"])
        .args(sample_edges())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], 1);
    assert_eq!(json["order"], "dft");
    assert_eq!(json["visited"], serde_json::json!([1, 2, 4, 7, 6, 3, 5]));
}

#[test]
fn test_traverse_graph_file_merged_with_edges() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    std::fs::write(&graph, r#"{"edges": [[1, 2], [2, 3]]}"#).unwrap();

    let output = graphwalk()
        .args(["--quiet", "traverse", "1", "-e", "3:4", "--graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output.stdout), ["1", "2", "3", "4"]);
}

#[test]
fn test_traverse_invalid_graph_file_exit_code_1() {
    let dir = tempdir().unwrap();
    let graph = dir.path().join("graph.json");
    std::fs::write(&graph, "not json").unwrap();

    graphwalk()
        .args(["traverse", "1", "--graph"])
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}
