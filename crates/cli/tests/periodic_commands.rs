use assert_cmd::prelude::*;
use chrono::{Datelike, Duration, Local};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn zk(root: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("zk"));
    cmd.env("ZETTELKASTEN", root);
    cmd.env("ZETTELKASTEN_EDITOR", "true");
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(path: &PathBuf, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn daily_path(root: &Path) -> PathBuf {
    let today = Local::now().date_naive();
    root.join("periodic-notes/daily-notes")
        .join(format!("{}.md", today.format("%Y-%m-%d")))
}

fn weekly_path(root: &Path) -> PathBuf {
    let week = Local::now().date_naive().iso_week();
    root.join("periodic-notes/weekly-notes")
        .join(format!("{}-W{:02}.md", week.year(), week.week()))
}

#[test]
fn day_creates_note_with_navigation_links() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root).arg("day").assert().success();

    let today = Local::now().date_naive();
    let expected = format!(
        "# [[{}]] - [[{}]]\n\n",
        (today - Duration::days(1)).format("%Y-%m-%d"),
        (today + Duration::days(1)).format("%Y-%m-%d"),
    );
    assert_eq!(fs::read_to_string(daily_path(&root)).unwrap(), expected);
}

#[test]
fn day_twice_keeps_existing_content() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root).arg("day").assert().success();
    fs::write(daily_path(&root), "journal entry").unwrap();

    zk(&root)
        .arg("day")
        .assert()
        .success()
        .stderr(predicate::str::contains("Daily note already exists"));
    assert_eq!(fs::read_to_string(daily_path(&root)).unwrap(), "journal entry");
}

#[test]
fn day_uses_template_when_present() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    write(&root.join("zk/daily.md"), "TEMPLATE");

    zk(&root).arg("day").assert().success();
    assert_eq!(fs::read_to_string(daily_path(&root)).unwrap(), "TEMPLATE");
}

#[test]
fn week_creates_iso_week_note() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root)
        .arg("week")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created weekly note"));

    let content = fs::read_to_string(weekly_path(&root)).unwrap();
    assert!(content.starts_with("# [["), "unexpected content: {content}");
    assert!(content.contains("-W"), "unexpected content: {content}");
}

#[test]
fn custom_directories_are_respected() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root).env("ZETTELKASTEN_DAILY_DIR", "_Daily").arg("day").assert().success();

    let today = Local::now().date_naive();
    assert!(root.join("_Daily").join(format!("{}.md", today.format("%Y-%m-%d"))).is_file());
}

#[test]
fn failing_editor_exits_one() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root)
        .env("ZETTELKASTEN_EDITOR", "false")
        .arg("day")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Editor exited with error"));
    // The note is created before the editor is launched.
    assert!(daily_path(&root).is_file());
}

#[test]
fn missing_editor_exits_one() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root)
        .env("ZETTELKASTEN_EDITOR", "zk-no-such-editor")
        .arg("week")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Editor 'zk-no-such-editor' not found"));
}

#[test]
fn log_file_receives_notices() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let log = root.join("zk.log");

    zk(&root).env("ZETTELKASTEN_LOG_FILE", &log).arg("day").assert().success();

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("Created daily note"), "log was: {logged}");
}

#[test]
fn doctor_prints_resolved_paths() {
    let tmp = tempdir().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    zk(&root)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   zk doctor"))
        .stdout(predicate::str::contains(format!("root: {}", root.display())))
        .stdout(predicate::str::contains("daily_template:"))
        .stdout(predicate::str::contains("(missing)"))
        .stdout(predicate::str::contains("editor: true"));
}
