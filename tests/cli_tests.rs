use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_workflow_commands() {
    Command::cargo_bin("tenantforge")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("provision"))
        .stdout(predicate::str::contains("members"))
        .stdout(predicate::str::contains("kubeconfig"));
}

#[test]
fn check_config_fails_for_a_missing_file() {
    Command::cargo_bin("tenantforge")
        .unwrap()
        .args(["check", "config", "--config", "no-such-config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn provision_requires_its_arguments() {
    Command::cargo_bin("tenantforge")
        .unwrap()
        .arg("provision")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--project-name"));
}
