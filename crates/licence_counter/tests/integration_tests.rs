use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn command() -> Command {
    let mut cmd = Command::cargo_bin("licence-counter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Test CLI help output
#[test]
fn test_cli_help() {
    command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--headless"));
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    command().arg("--version").assert().success();
}

/// Test startup without a configuration file
#[test]
fn test_missing_config() {
    let temp_dir = TempDir::new().unwrap();

    command()
        .current_dir(temp_dir.path())
        .arg("--headless")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Failed to load configuration: Failed to read configuration file",
        ));
}

/// Test startup with malformed JSON
#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, r#"{ "path": { "actual_keys": "a" } }"#).unwrap();

    command()
        .arg("--config")
        .arg(&path)
        .arg("--headless")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to parse configuration file"));
}

/// Test configuration with an empty extension
#[test]
fn test_config_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "path": { "actual_keys": "a", "activated_keys": "b" },
            "extensions": { "actual": "", "activated": ".used" },
            "file_server": {
                "ip_address": "127.0.0.1",
                "target_dir": "licences",
                "username": "reader",
                "password": "secret",
                "client_machine_name": "COUNTER-PC"
            }
        }"#,
    )
    .unwrap();

    command()
        .arg("-c")
        .arg(&path)
        .arg("--headless")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Configuration validation failed: extensions.actual must not be empty",
        ));
}

/// Test that an unreachable server is reported as zero keys
#[test]
fn test_unreachable_server_counts_zero() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{
            "path": { "actual_keys": "keys/actual", "activated_keys": "keys/activated" },
            "extensions": { "actual": ".key", "activated": ".used" },
            "file_server": {
                "ip_address": "127.0.0.1",
                "target_dir": "licences",
                "username": "reader",
                "password": "secret",
                "client_machine_name": "COUNTER-PC",
                "port": 1
            }
        }"#,
    )
    .unwrap();

    command()
        .arg("-c")
        .arg(&path)
        .arg("--headless")
        .assert()
        .success()
        .stdout(predicate::str::contains("actual: 0"))
        .stdout(predicate::str::contains("activated: 0"));
}
