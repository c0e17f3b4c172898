//! Integration tests for the envcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(env_content: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), env_content).unwrap();
    temp
}

const NOISY_ENV: &str = r#"
# Application settings
APP_NAME=demo
DEBUG=
GREETING=hello world
API_SECRET=abc
not a valid line !!
"#;

#[test]
fn cli_reports_missing_env_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No environment file found"))
        .stdout(predicate::str::contains(".env.production"));
    Ok(())
}

#[test]
fn cli_reports_clean_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("APP_NAME=demo\nPORT=3000\n");
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 2 environment variable(s) in .env:",
        ))
        .stdout(predicate::str::contains("No issues found"))
        .stdout(predicate::str::contains("Confidence: 100%"));
    Ok(())
}

#[test]
fn cli_reports_issues_and_score() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(NOISY_ENV);
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    // DEBUG empty, GREETING spaced, API_SECRET weak, one unparsable line.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("empty-value"))
        .stdout(predicate::str::contains("embedded-space"))
        .stdout(predicate::str::contains("weak-secret"))
        .stdout(predicate::str::contains("unparsable-line"))
        .stdout(predicate::str::contains("Found 4 potential issue(s)"))
        .stdout(predicate::str::contains("Confidence: 60%"));
    Ok(())
}

#[test]
fn cli_masks_sensitive_values() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("API_SECRET=supersecretvalue\nSSH_KEY=hunter2zzz\n");
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("API_SECRET=********"))
        .stdout(predicate::str::contains("SSH_KEY=********"))
        .stdout(predicate::str::contains("supersecretvalue").not())
        .stdout(predicate::str::contains("hunter2zzz").not());
    Ok(())
}

#[test]
fn cli_respects_candidate_priority() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env.local"), "A=1\n").unwrap();
    fs::write(temp.path().join(".env.production"), "A=1\nB=2\n").unwrap();

    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    cmd.assert().success().stdout(predicate::str::contains(
        "Found 1 environment variable(s) in .env.local:",
    ));
    Ok(())
}

#[test]
fn cli_keeps_checking_past_malformed_utf8() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new().unwrap();
    let mut bytes = b"APP_NAME=demo\n".to_vec();
    bytes.extend_from_slice(&[0xC0, 0x80]);
    bytes.extend_from_slice(b"\nPORT=3000\n");
    fs::write(temp.path().join(".env"), bytes).unwrap();

    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 2 environment variable(s)"))
        .stdout(predicate::str::contains("unparsable-line"))
        .stdout(predicate::str::contains("Confidence: 90%"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_read_failure_exits_nonzero_with_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".env");
    fs::write(&path, "A=1\n").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores file permissions; nothing to provoke then.
    if fs::read(&path).is_ok() {
        return Ok(());
    }

    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to read"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Heuristic sanity checker"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_positional_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("envcheck"));
    cmd.arg("some/path");
    cmd.assert().failure();
    Ok(())
}
