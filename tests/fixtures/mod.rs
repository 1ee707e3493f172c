//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the keybridge binary
pub fn keybridge_bin() -> &'static str {
    env!("CARGO_BIN_EXE_keybridge")
}

/// Writes `content` to a config file in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for as long as the file is needed.
pub fn create_temp_config(content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (path, temp_dir)
}

/// A config path inside a temp directory that does not exist yet.
pub fn missing_config() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    (path, temp_dir)
}

/// Runs keybridge against `config` with the given arguments.
pub fn run(config: &PathBuf, args: &[&str]) -> Output {
    Command::new(keybridge_bin())
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON")
}
