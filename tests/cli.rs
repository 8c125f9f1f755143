use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};

const BINARY_NAME: &str = "perfice-ui";

/// Helper to get a temporary home directory
fn temp_home() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn storage_file(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("storage.json")
}

/// The binary with `$HOME` pointed at `home` and the given storage file.
fn perfice(home: &Path, storage: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home).arg("--storage").arg(storage);
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage").and(contains("storage")).and(contains("progress")));
}

#[test]
fn progress_prints_safe_ratio() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["progress", "1", "4"]).assert().success().stdout("0.25\n");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["progress", "5", "0"]).assert().success().stdout("0\n");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["progress", "2", "3", "--decimals", "4"])
        .assert()
        .success()
        .stdout("0.6667\n");
}

#[test]
fn format_limits_decimals() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["format", "3.14159", "--decimals", "3"])
        .assert()
        .success()
        .stdout("3.142\n");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["format", "12"]).assert().success().stdout("12\n");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["format", "-1.5"]).assert().success().stdout("-1.50\n");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["format", "2.5", "--decimals", "0"])
        .assert()
        .success()
        .stdout("3\n");

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["format", "0.125"]).assert().success().stdout("0.13\n");
}

#[test]
fn format_rejects_negative_decimals() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["format", "1.5", "--decimals", "-1"])
        .assert()
        .failure();
}

#[test]
fn storage_set_get_remove_clear() {
    let home = temp_home();
    let storage = storage_file(&home);

    perfice(home.path(), &storage)
        .args(["storage", "get", "remotes"])
        .assert()
        .success()
        .stdout("null\n");

    perfice(home.path(), &storage)
        .args(["storage", "set", "remotes", r#"{"sync": "https://sync.example.org"}"#])
        .assert()
        .success()
        .stdout(contains("Stored"));
    assert!(storage.exists());

    perfice(home.path(), &storage)
        .args(["storage", "get", "remotes"])
        .assert()
        .success()
        .stdout(contains(r#""sync": "https://sync.example.org""#));

    perfice(home.path(), &storage)
        .args(["storage", "remove", "remotes"])
        .assert()
        .success();
    perfice(home.path(), &storage)
        .args(["storage", "get", "remotes"])
        .assert()
        .success()
        .stdout("null\n");

    perfice(home.path(), &storage)
        .args(["storage", "set", "flag", "true"])
        .assert()
        .success();
    perfice(home.path(), &storage)
        .args(["storage", "clear"])
        .assert()
        .success()
        .stdout(contains("Cleared"));
    assert!(!storage.exists());
}

#[test]
fn storage_set_rejects_invalid_json() {
    let home = temp_home();
    let storage = storage_file(&home);

    perfice(home.path(), &storage)
        .args(["storage", "set", "broken", "{not json"])
        .assert()
        .failure()
        .stderr(contains("not valid JSON"));
}

#[test]
fn malformed_stored_value_reads_as_null() {
    let home = temp_home();
    let storage = storage_file(&home);
    fs::write(&storage, r#"{"darkMode": "not-json-at-all"}"#).unwrap();

    perfice(home.path(), &storage)
        .args(["storage", "get", "darkMode"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn history_record_and_list() {
    let home = temp_home();
    let storage = storage_file(&home);
    let run = home.path().join("run.json");
    fs::write(&run, r#"{"sleep~mood": 0.8123, "noise~mood": 0.1}"#).unwrap();

    perfice(home.path(), &storage)
        .args(["history", "record"])
        .arg(&run)
        .assert()
        .success()
        .stdout(contains("1 of 2 correlations"));

    perfice(home.path(), &storage)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(contains("0.81\tsleep~mood").and(contains("noise~mood").not()));

    perfice(home.path(), &storage)
        .args(["history", "clear"])
        .assert()
        .success();
    perfice(home.path(), &storage)
        .args(["history", "list"])
        .assert()
        .success()
        .stdout(contains("no significant correlations"));
}
