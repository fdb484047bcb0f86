use crate::cli::support::graphwalk;
use predicates::prelude::*;

fn social_json(args: &[&str]) -> serde_json::Value {
    let output = graphwalk()
        .args(["--format", "json", "social"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_social_creates_expected_counts() {
    let json = social_json(&["--users", "10", "--avg-friendships", "2", "--seed", "42"]);

    assert_eq!(json["users"].as_array().unwrap().len(), 10);
    assert_eq!(json["stats"]["total_users"], 10);

    // Each friendship appears once in each friend's list
    let entries: usize = json["friendships"]
        .as_object()
        .unwrap()
        .values()
        .map(|friends| friends.as_array().unwrap().len())
        .sum();
    assert_eq!(entries, 2 * 10);
}

#[test]
fn test_social_seed_is_reproducible() {
    let args = ["--users", "20", "--avg-friendships", "3", "--seed", "7"];
    assert_eq!(social_json(&args), social_json(&args));
}

#[test]
fn test_social_paths_start_at_user() {
    let json = social_json(&[
        "--users",
        "15",
        "--avg-friendships",
        "4",
        "--seed",
        "3",
        "--user",
        "2",
    ]);

    let paths = json["paths"].as_object().unwrap();
    assert_eq!(paths["2"], serde_json::json!([2]));
    for (id, path) in paths {
        let path = path.as_array().unwrap();
        assert_eq!(path.first().unwrap(), 2);
        assert_eq!(path.last().unwrap().to_string(), *id);
    }
    assert_eq!(json["stats"]["extended_network_size"], paths.len() - 1);
}

#[test]
fn test_social_human_output() {
    graphwalk()
        .args(["social", "--users", "10", "--avg-friendships", "2", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10 users, 10 friendships"))
        .stdout(predicate::str::contains("Extended network of user 1:"))
        .stdout(predicate::str::contains("1: 1"));
}

#[test]
fn test_social_too_many_friendships_exit_code_2() {
    graphwalk()
        .args(["social", "--users", "3", "--avg-friendships", "3"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("avg_friendships"));
}

#[test]
fn test_social_unknown_user_exit_code_3() {
    graphwalk()
        .args(["social", "--users", "5", "--avg-friendships", "1", "--user", "99"])
        .assert()
        .code(3);
}

#[test]
fn test_social_large_sparse_network() {
    graphwalk()
        .args([
            "--quiet",
            "social",
            "--users",
            "20000",
            "--avg-friendships",
            "2",
            "--seed",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("of 19999 other users"));
}
