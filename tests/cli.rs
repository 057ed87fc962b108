//! CLI integration tests
//!
//! Runs the apportion binary against an isolated config directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a command with its config directory pointed at a temp dir
fn apportion(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("apportion").unwrap();
    cmd.env("APPORTION_DATA_DIR", config_dir.path());
    cmd
}

#[test]
fn bare_invocation_prints_hint() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("apportion tui"));
}

#[test]
fn plan_prints_preset_allocation() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("35 000 ₽"))
        .stdout(predicate::str::contains("73 000 ₽"))
        .stdout(predicate::str::contains("Total percent: 100.00%"))
        .stdout(predicate::str::contains("Warning").not());
}

#[test]
fn plan_with_overrides_warns_when_unbalanced() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .args(["plan", "--set", "rent=40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("40 000 ₽"))
        .stdout(predicate::str::contains("Total percent: 105.00%"))
        .stdout(predicate::str::contains("must sum to 100%"));
}

#[test]
fn plan_respects_budget_and_currency() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .args(["plan", "--budget", "50000", "--currency", "usd"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17 500 $"))
        .stdout(predicate::str::contains("7 500 $"));
}

#[test]
fn plan_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .args(["plan", "--set", "vacation=10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category key: vacation"));
}

#[test]
fn plan_rejects_unknown_currency() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .args(["plan", "--currency", "GBP"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported currency code"));
}

#[test]
fn categories_lists_the_preset() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Needs"))
        .stdout(predicate::str::contains("Rent (rent): 35%"))
        .stdout(predicate::str::contains("Reserve fund (reserve): 5%"));
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("plan.json");

    apportion(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported plan to"));

    let contents = std::fs::read_to_string(&out).unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(value["currency"], "RUB");
    assert_eq!(value["is_balanced"], true);
    assert_eq!(value["categories"].as_array().unwrap().len(), 12);
    assert_eq!(value["categories"][0]["amount"], 35_000);
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key,Name,Group,Percent,Amount"))
        .stdout(predicate::str::contains("rent,Rent,Needs,35,35000"));
}

#[test]
fn export_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .args(["export", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    apportion(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Currency:       RUB"))
        .stdout(predicate::str::contains("Default budget: 100000"));
}

#[test]
fn settings_file_changes_session_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"schema_version":1,"currency":"EUR","default_budget":60000.0}"#,
    )
    .unwrap();

    apportion(&dir)
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("21 000 €"))
        .stdout(predicate::str::contains("Budget: 60 000 €"));
}
