use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;

const BINARY_NAME: &str = "insights-dashboard";

/// Command pointed at a config file that does not exist, so defaults apply.
fn isolated_cmd(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("INSIGHTS_CONFIG", dir.path().join("config.json"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Marketing analytics dashboard"));
}

#[test]
fn export_to_stdout_prints_header_and_all_campaigns() {
    let tmp = tempfile::tempdir().unwrap();
    let output = isolated_cmd(&tmp)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert!(lines[0].starts_with("\"Campaign Name\",\"Status\",\"Impressions\""));
    // default sort is name ascending
    assert!(lines[1].starts_with("\"Brand Awareness Q2\""));
}

#[test]
fn export_to_stdout_matches_written_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("exports");
    let printed = isolated_cmd(&tmp)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    isolated_cmd(&tmp)
        .arg("export")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success();

    let file = fs::read_dir(&out).unwrap().next().unwrap().unwrap().path();
    let written = fs::read(file).unwrap();
    assert!(!printed.ends_with(b"\n"));
    assert_eq!(printed, written);
}

#[test]
fn export_search_filters_rows() {
    let tmp = tempfile::tempdir().unwrap();
    isolated_cmd(&tmp)
        .args(["export", "--search", "summer", "--stdout"])
        .assert()
        .success()
        .stdout(contains("Summer Sale 2024").and(contains("Product Launch").not()));
}

#[test]
fn export_sorts_descending_by_spend() {
    let tmp = tempfile::tempdir().unwrap();
    let output = isolated_cmd(&tmp)
        .args(["export", "--sort", "spend", "--descending", "--stdout"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let first_row = text.lines().nth(1).unwrap();
    assert!(first_row.starts_with("\"Holiday Promotion\""));
}

#[test]
fn export_writes_dated_csv_file() {
    let tmp = tempfile::tempdir().unwrap();
    let out = tmp.path().join("exports");

    isolated_cmd(&tmp)
        .arg("export")
        .arg("--output-dir")
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Export complete"));

    let files: Vec<_> = fs::read_dir(&out)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(files.len(), 1);
    assert!(files[0].starts_with("campaign-performance-"));
    assert!(files[0].ends_with(".csv"));

    let written = fs::read_to_string(out.join(&files[0])).unwrap();
    assert_eq!(written.lines().count(), 6);
}

#[test]
fn export_rejects_unknown_sort_field() {
    let tmp = tempfile::tempdir().unwrap();
    isolated_cmd(&tmp)
        .args(["export", "--sort", "budget", "--stdout"])
        .assert()
        .failure();
}

#[test]
fn snapshot_prints_four_metrics() {
    let tmp = tempfile::tempdir().unwrap();
    let output = isolated_cmd(&tmp)
        .arg("snapshot")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Total Revenue: $"));
    assert!(lines[3].starts_with("Growth Rate: "));
}

#[test]
fn invalid_config_file_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write(tmp.path().join("config.json"), "not json").unwrap();
    isolated_cmd(&tmp)
        .arg("snapshot")
        .assert()
        .failure()
        .stderr(contains("Failed to load config"));
}

#[test]
fn init_config_writes_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    isolated_cmd(&tmp)
        .arg("init-config")
        .assert()
        .success()
        .stdout(contains("Config written"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["refresh_interval_secs"], 10);
    assert_eq!(written["with_background_color"], false);
}

#[test]
fn init_config_keeps_existing_file_without_force() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("config.json");
    fs::write(&path, r#"{ "refresh_interval_secs": 30 }"#).unwrap();

    isolated_cmd(&tmp)
        .arg("init-config")
        .assert()
        .success()
        .stdout(contains("Config already exists"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        r#"{ "refresh_interval_secs": 30 }"#
    );

    // --force fills in the missing settings and keeps the existing one
    isolated_cmd(&tmp)
        .args(["init-config", "--force"])
        .assert()
        .success();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["refresh_interval_secs"], 30);
    assert!(written.get("with_background_color").is_some());
}
