//! Integration tests for the top-level CLI, config and logging

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{adash_cmd, run_adash, write_file};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_adash(&["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["view", "diff", "config", "completions"] {
        assert!(stdout.contains(name), "help should list {}: {}", name, stdout);
    }
    assert!(stdout.contains("--log-file"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("adash")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "adash {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let (_stdout, stderr, exit_code) = run_adash(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

#[test]
fn diff_help_documents_flags() {
    let (stdout, _stderr, exit_code) = run_adash(&["diff", "--help"]);

    assert_eq!(exit_code, 0);
    for flag in ["--context", "--gap", "--json", "--plain", "--view"] {
        assert!(stdout.contains(flag), "diff help should mention {}", flag);
    }
}

#[test]
fn completions_generate_bash_script() {
    Command::cargo_bin("adash")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_adash"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_honors_env_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    let output = adash_cmd(&path).args(["config", "path"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        path.display().to_string()
    );
}

#[test]
fn config_show_prints_defaults_without_file() {
    let (stdout, _stderr, exit_code) = run_adash(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[diff]"));
    assert!(stdout.contains("context_size = 3"));
    assert!(stdout.contains("gap_threshold = 3"));
    assert!(stdout.contains("sidebar_width = 24"));
    assert!(stdout.contains("background = 238"));
}

#[test]
fn config_show_reflects_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "config.toml", "[diff]\ncontext_size = 7\n");

    let output = adash_cmd(&path).args(["config", "show"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("context_size = 7"));
    assert!(stdout.contains("gap_threshold = 3"));
}

#[test]
fn invalid_config_fails_with_path_in_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "config.toml", "[diff]\ncontext_size = \"wide\"\n");

    let output = adash_cmd(&path).args(["config", "show"]).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Invalid config file"), "stderr: {}", stderr);
    assert!(stderr.contains("config.toml"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn log_file_receives_debug_events() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("adash.log");

    let output = adash_cmd(&dir.path().join("missing.toml"))
        .env("ADASH_LOG", "debug")
        .args(["--log-file", log_path.to_str().unwrap(), "config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("no config file, using defaults"), "log: {}", log);
    assert!(log.contains("DEBUG"));
}

#[test]
fn logs_stay_off_the_terminal() {
    let dir = TempDir::new().unwrap();
    let output = adash_cmd(&dir.path().join("missing.toml"))
        .env("ADASH_LOG", "trace")
        .args(["config", "show"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("no config file"));
}
