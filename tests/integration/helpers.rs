//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Path of a single fixture file.
pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Read a fixture file as text.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

/// Write `content` to `name` inside `dir` and return the path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    path
}

/// An adash command isolated from the user's config and log settings.
///
/// `config` is used as the config file path; it does not need to exist.
pub fn adash_cmd(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_adash"));
    cmd.env("ADASH_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("ADASH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Run adash with `args` and capture (stdout, stderr, exit code).
pub fn run_adash(args: &[&str]) -> (String, String, i32) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = adash_cmd(&dir.path().join("config.toml"))
        .args(args)
        .output()
        .expect("Failed to execute adash");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
