use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("snipbin").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paste and share code snippet threads"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("snipbin").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_create_requires_content() {
    let mut cmd = Command::cargo_bin("snipbin").unwrap();
    cmd.arg("create").assert().failure().stderr(predicate::str::contains("CONTENT"));
}
