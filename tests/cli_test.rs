//! CLI binary surface tests.
//!
//! These exercise argument handling and pre-flight validation only; nothing
//! here touches the network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_harvest_command() {
    Command::cargo_bin("tagatlas")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("harvest"));
}

#[test]
fn test_invalid_index_url_fails_before_any_request() {
    Command::cargo_bin("tagatlas")
        .unwrap()
        .args(["harvest", "--index-url", "not-a-url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid index URL"));
}

#[test]
fn test_missing_output_directory_fails_before_any_request() {
    Command::cargo_bin("tagatlas")
        .unwrap()
        .args([
            "harvest",
            "--index-url",
            "https://example.invalid/elements",
            "--output",
            "/definitely-not-a-dir/tags.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}
