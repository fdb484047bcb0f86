use crate::cli::support::graphwalk;
use assert_cmd::Command;
use predicates::prelude::*;

/// Parent:child pairs of the family tree
///
/// ```text
///  10
///   |
///   1   2   4  11
///    \ /   / \ /
///     3   5   8
///      \ / \   \
///       6   7   9
/// ```
fn family(start: &str) -> Command {
    let pairs = [
        "1:3", "2:3", "3:6", "5:6", "5:7", "4:5", "4:8", "8:9", "11:8", "10:1",
    ];
    let mut cmd = graphwalk();
    cmd.args(["--quiet", "ancestor", start]);
    for pair in pairs {
        cmd.args(["--pair", pair]);
    }
    cmd
}

#[test]
fn test_ancestor_follows_longest_chain() {
    family("6").assert().success().stdout("10\n");
    family("3").assert().success().stdout("10\n");
    family("1").assert().success().stdout("10\n");
}

#[test]
fn test_ancestor_without_parents_is_minus_one() {
    family("10").assert().success().stdout("-1\n");
    family("2").assert().success().stdout("-1\n");
    family("11").assert().success().stdout("-1\n");
}

#[test]
fn test_ancestor_tie_prefers_smallest_id() {
    // 8 has parents 4 and 11, both one step away
    family("8").assert().success().stdout("4\n");
    family("9").assert().success().stdout("4\n");
    family("7").assert().success().stdout("4\n");
}

#[test]
fn test_ancestor_prints_chain() {
    graphwalk()
        .args(["ancestor", "6", "-p", "1:3", "-p", "3:6", "-p", "10:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ancestry: 6 -> 3 -> 1 -> 10"));
}

#[test]
fn test_ancestor_json_output() {
    let output = graphwalk()
        .args(["--format", "json", "ancestor", "9", "-p", "4:8", "-p", "8:9", "-p", "11:8"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["start"], 9);
    assert_eq!(json["earliest_ancestor"], 4);
    assert_eq!(json["ancestry"], serde_json::json!([9, 8, 4]));
}

#[test]
fn test_ancestor_no_pairs() {
    graphwalk()
        .args(["ancestor", "1"])
        .assert()
        .success()
        .stdout("-1\n");
}
