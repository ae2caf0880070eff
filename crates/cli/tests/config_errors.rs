use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn zk() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zk"));
    cmd.env_remove("ZETTELKASTEN");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn every_command_exits_two_without_root() {
    for args in [vec!["new", "Foo"], vec!["new", "--vim", "Foo"], vec!["day"], vec!["week"]] {
        zk().args(&args)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Configuration error"))
            .stderr(predicate::str::contains("ZETTELKASTEN"));
    }
}

#[test]
fn empty_root_counts_as_unset() {
    zk().env("ZETTELKASTEN", "")
        .arg("day")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("ZETTELKASTEN"));
}

#[test]
fn nonexistent_root_exits_two() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().join("missing");
    zk().env("ZETTELKASTEN", &root)
        .arg("week")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
    assert!(!root.exists());
}

#[test]
fn doctor_reports_failure() {
    zk().arg("doctor")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("FAIL zk doctor"))
        .stdout(predicate::str::contains("hint: export ZETTELKASTEN="));
}

#[test]
fn no_arguments_prints_help() {
    zk().assert().failure().stderr(predicate::str::contains("Usage"));
}
