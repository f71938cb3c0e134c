//! CLI interface tests (offline commands only)

#![cfg(feature = "cli")]

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_daily-rates"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("summary"));
    assert!(stdout.contains("day"));
}

#[test]
fn test_config_command_prints_effective_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nuser_agent = \"cli-test-agent\"\n\n[run]\nfailure_policy = \"skip\"").unwrap();

    let output = binary()
        .args(["--config", file.path().to_str().unwrap(), "config"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("cli-test-agent"));
    assert!(stdout.contains("failure_policy = \"skip\""));
    assert!(stdout.contains("date_format"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\ntimeout_secs = 0").unwrap();

    let output = binary()
        .args(["--config", file.path().to_str().unwrap(), "config"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout_secs"));
}

#[test]
fn test_day_rejects_bad_date() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[api]\nbase_url = \"http://127.0.0.1:9/\"").unwrap();

    let output = binary()
        .args(["--config", file.path().to_str().unwrap(), "day", "16/10/2026"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid date"));
}

#[test]
fn test_unknown_policy_rejected_by_parser() {
    let output = binary()
        .args(["summary", "--policy", "retry"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
