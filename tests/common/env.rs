//! Test environment for isolated flockbook runs.
//!
//! Every `TestEnv` owns a temp directory holding the snapshot, the config
//! home and the working directory, so tests never see the user's farm.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Result of running a flockbook CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as the single `--json` document
    pub fn json(&self) -> Value {
        serde_json::from_str(self.stdout.trim()).unwrap_or_else(|e| {
            panic!(
                "stdout is not one JSON document ({e}):\n{}\nstderr:\n{}",
                self.stdout, self.stderr
            )
        })
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    root: TempDir,
    bin: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("work")).expect("Failed to create work dir");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_flockbook")),
        }
    }

    /// Snapshot file used by every run
    pub fn data_path(&self) -> PathBuf {
        self.root.path().join("data").join("farm.json")
    }

    pub fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    /// Working directory of every run
    pub fn work_dir(&self) -> PathBuf {
        self.root.path().join("work")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `$XDG_CONFIG_HOME/flockbook/config.toml`
    pub fn write_config(&self, content: &str) {
        let dir = self.config_home().join("flockbook");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), content).expect("Failed to write config");
    }

    /// Write the snapshot file directly
    pub fn write_data(&self, content: &str) {
        let path = self.data_path();
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create data dir");
        std::fs::write(path, content).expect("Failed to write data file");
    }

    /// Saved snapshot, parsed
    pub fn read_data(&self) -> Value {
        let raw = std::fs::read_to_string(self.data_path()).expect("No snapshot written");
        serde_json::from_str(&raw).expect("Snapshot is not valid JSON")
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with `--json` appended and parse the document
    pub fn run_json(&self, args: &[&str]) -> (TestResult, Value) {
        let mut all = args.to_vec();
        all.push("--json");
        let result = self.run(&all);
        let value = result.json();
        (result, value)
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.work_dir())
            .args(args)
            .env("FLOCKBOOK_DATA_PATH", self.data_path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("HOME", self.root.path())
            .env("FLOCKBOOK_COLOR", "never")
            .env_remove("FLOCKBOOK_EXPORT_DIR")
            .env_remove("FLOCKBOOK_GUARD")
            .env_remove("FLOCKBOOK_LOG_FORMAT")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute flockbook");
        to_result(output)
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
