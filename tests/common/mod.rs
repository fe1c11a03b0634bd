//! Common test utilities for tzpick CLI and scenario tests.
//!
//! - `TestEnv`: isolated config directory plus a runner for the binary
//! - `TestResult`: captured exit status and output

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the tzpick binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: a temp directory holding the config file.
///
/// Every run passes `--config` explicitly and clears the `TZPICK_*`
/// overrides so the developer's own setup never leaks in.
pub struct TestEnv {
    pub dir: TempDir,
    envs: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            envs: Vec::new(),
        }
    }

    /// Set an environment variable for every subsequent run
    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.envs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("tzpick").join("config.toml")
    }

    /// Write raw TOML to the config path
    pub fn write_config(&self, contents: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let config = self.config_path();
        run_bin(args, Some(&config), &self.envs)
    }
}

/// Run the binary without an explicit `--config`
pub fn run_bare(args: &[&str]) -> TestResult {
    run_bin(args, None, &[])
}

fn run_bin(args: &[&str], config: Option<&Path>, envs: &[(String, String)]) -> TestResult {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tzpick"));
    cmd.args(args)
        .env_remove("TZPICK_TIMEZONES")
        .env_remove("TZPICK_ASCII")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    if let Some(path) = config {
        cmd.arg("--config").arg(path);
    }
    for (key, value) in envs {
        cmd.env(key, value);
    }

    let output = cmd.output().unwrap();
    TestResult {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
