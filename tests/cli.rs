use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary config directory
fn temp_config_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".sheetwatch").join("config.json")
}

const BINARY_NAME: &str = "sheetwatch";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Configure command should write the given values to the config file.
fn configure_command_creates_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);

    // Ensure the file does not exist initially
    assert!(!config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("configure")
        .arg("--spreadsheet-id")
        .arg("sheet-under-test")
        .arg("--api-key")
        .arg("test-api-key")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Configuration saved"));

    // Confirm the file was created with the given values
    let body = fs::read_to_string(&config_path).unwrap();
    assert!(body.contains("sheet-under-test"));
    assert!(body.contains("test-api-key"));
}

#[test]
/// Clear command should delete an existing config file.
fn clear_deletes_config_file() {
    let tmp = temp_config_dir();
    let config_path = config_file_path(&tmp);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{}").unwrap();

    // Ensure the file exists
    assert!(config_path.exists());

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("clear")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .success()
        .stdout(contains("Clearing"));

    // Confirm the file was deleted
    assert!(!config_path.exists());
}

#[test]
/// Fetch without a configured API key must fail before any network call and
/// report the configuration error.
fn fetch_without_credential_reports_configuration_error() {
    let tmp = temp_config_dir();

    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("fetch")
        .env("HOME", tmp.path()) // simulate different $HOME
        .assert()
        .failure()
        .stdout(contains("Please configure your Google API key"));
}
