use crate::cli::support::{graphwalk, sample_edges, stdout_lines};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_file_sets_default_order() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("graphwalk.toml"),
        "[traversal]\norder = \"dft\"\n",
    )
    .unwrap();

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "traverse", "1"])
        .args(sample_edges())
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output.stdout),
        ["1", "2", "4", "7", "6", "3", "5"]
    );
}

#[test]
fn test_flag_overrides_config() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("graphwalk.toml"),
        "[traversal]\nstrategy = \"dfs\"\n",
    )
    .unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "1", "6", "--strategy", "bfs"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout(predicate::str::contains("(bfs)"));

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "1", "6"])
        .args(sample_edges())
        .assert()
        .success()
        .stdout(predicate::str::contains("(dfs)"));
}

#[test]
fn test_explicit_config_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(&config, "[social]\nusers = 6\navg_friendships = 2\nseed = 11\n").unwrap();

    let output = graphwalk()
        .args(["--format", "json", "social", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["stats"]["total_users"], 6);
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    graphwalk()
        .args(["--config"])
        .arg(dir.path().join("absent.toml"))
        .args(["traverse", "1", "-e", "1:2"])
        .assert()
        .failure();
}

#[test]
fn test_ancestor_ignores_invalid_config() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("graphwalk.toml"), "[traversal\n").unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "ancestor", "2", "-p", "1:2"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn test_explicit_flags_skip_invalid_config() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("graphwalk.toml"), "[traversal\n").unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "traverse", "1", "--order", "bft", "-e", "1:2"])
        .assert()
        .success()
        .stdout("1\n2\n");
}

#[test]
fn test_invalid_config_exit_code_1() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("graphwalk.toml"), "[traversal\n").unwrap();

    graphwalk()
        .current_dir(dir.path())
        .args(["traverse", "1", "-e", "1:2"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
