use crate::cli::support::graphwalk;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    graphwalk()
        .args(["--log-level", "debug", "traverse", "1", "-e", "1:2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    graphwalk()
        .args(["--log-level", "warn", "traverse", "1", "-e", "1:2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    graphwalk()
        .args(["--verbose", "traverse", "1", "-e", "1:2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("graph loaded"));
}

#[test]
fn test_log_json_emits_json_lines() {
    graphwalk()
        .args(["--log-json", "--verbose", "traverse", "1", "-e", "1:2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"parse_args\""));
}

#[test]
fn test_logs_stay_off_stdout() {
    graphwalk()
        .args(["--verbose", "--quiet", "traverse", "1", "-e", "1:2"])
        .assert()
        .success()
        .stdout("1\n2\n");
}
