//! CLI surface tests for the server binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_server_options() {
    Command::cargo_bin("voxchat_server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--static-dir"))
        .stdout(predicate::str::contains("--log-dir"));
}

#[test]
fn invalid_port_is_rejected() {
    Command::cargo_bin("voxchat_server")
        .unwrap()
        .args(["--port", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--port"));
}
