//! Integration tests for the contactbook CLI
//!
//! These run the real binary and check what it prints.


use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a contactbook command
///
/// Points the config at an empty temp dir so the user's own config
/// cannot leak into the test.
fn contactbook(config_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("contactbook"));
    cmd.env("CONTACTBOOK_CONFIG", config_dir.path().join("config.toml"));
    cmd.env_remove("RUST_LOG");
    cmd
}

const DEMO_OUTPUT: &str = "\
[Notification → alice@email.com] New contact 'Alice' added.
[Notification → bob@email.com] New contact 'Bob' added.
Alice | alice@email.com | 123456
Bob | bob@email.com | 987654
[Notification → alice@email.com] Contact 'Alice' has been removed.
";

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    contactbook(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("contactbook"));
}

#[test]
fn test_version_subcommand_json() {
    let temp = TempDir::new().unwrap();
    contactbook(&temp)
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_no_args_runs_demo() {
    let temp = TempDir::new().unwrap();
    contactbook(&temp).assert().success().stdout(DEMO_OUTPUT);
}

#[test]
fn test_demo_subcommand() {
    let temp = TempDir::new().unwrap();
    contactbook(&temp).arg("demo").assert().success().stdout(DEMO_OUTPUT);
}

#[test]
fn test_demo_json_keeps_stdout_parseable() {
    let temp = TempDir::new().unwrap();
    let output = contactbook(&temp).args(["demo", "--json"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 2);
    assert_eq!(value["contacts"][0]["name"], "Alice");

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("[Notification → alice@email.com]"));
}

#[test]
fn test_log_notifier_moves_notifications_off_stdout() {
    let temp = TempDir::new().unwrap();
    contactbook(&temp)
        .args(["demo", "--notifier", "log"])
        .assert()
        .success()
        .stdout("Alice | alice@email.com | 123456\nBob | bob@email.com | 987654\n")
        .stderr(predicate::str::contains("Contact 'Alice' has been removed."));
}

#[test]
fn test_config_file_selects_notifier() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[notifications]\nchannel = \"log\"\n")
        .unwrap();

    contactbook(&temp)
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Notification").not());
}

#[test]
fn test_flag_beats_config_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "[notifications]\nchannel = \"log\"\n")
        .unwrap();

    contactbook(&temp).args(["demo", "--notifier", "console"]).assert().success().stdout(DEMO_OUTPUT);
}

#[test]
fn test_bad_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "[notifications\n").unwrap();

    contactbook(&temp)
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_unknown_notifier_is_rejected() {
    let temp = TempDir::new().unwrap();
    contactbook(&temp)
        .args(["demo", "--notifier", "pigeon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown notifier"));
}
