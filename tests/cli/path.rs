use crate::cli::support::{graphwalk, sample_edges};
use predicates::prelude::*;

#[test]
fn test_path_bfs_shortest() {
    graphwalk()
        .args(["path", "1", "6"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 4 -> 6"))
        .stdout(predicate::str::contains("Path length: 3 hops (bfs)"));
}

#[test]
fn test_path_dfs() {
    graphwalk()
        .args(["path", "1", "6", "--strategy", "dfs"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout(predicate::str::contains("1 -> 2 -> 4 -> 7 -> 6"))
        .stdout(predicate::str::contains("Path length: 4 hops (dfs)"));
}

#[test]
fn test_path_single_hop() {
    graphwalk()
        .args(["path", "4", "7"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 1 hop (bfs)"));
}

#[test]
fn test_path_to_self() {
    graphwalk()
        .args(["--quiet", "path", "3", "3"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_path_not_found() {
    graphwalk()
        .args(["path", "1", "3", "-e", "1:2", "-e", "3:4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from 1 to 3"));
}

#[test]
fn test_path_json_output() {
    let output = graphwalk()
        .args(["--format", "json", "path", "1", "6"])
        .args(sample_edges())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["strategy"], "bfs");
    assert_eq!(json["path"], serde_json::json!([1, 2, 4, 6]));
    assert_eq!(json["path_length"], 3);
}

#[test]
fn test_path_not_found_json() {
    let output = graphwalk()
        .args(["--format", "json", "path", "2", "1", "-e", "1:2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["path"], serde_json::json!([]));
}

#[test]
fn test_path_unknown_destination_exit_code_3() {
    graphwalk()
        .args(["path", "1", "99"])
        .args(sample_edges())
        .assert()
        .code(3);
}
