//! Common test utilities for mindmap integration tests.
//!
//! Provides `TestEnv` for isolated test environments that never read the
//! user's `~/.config/mindmap/config.kdl`.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// The tree from the documented four-child scenario.
pub const TOPIC_TREE: &str = r#"{
    "name": "Topic",
    "children": [{"name": "A"}, {"name": "B"}, {"name": "C"}, {"name": "D"}]
}"#;

/// A test environment with isolated configuration.
///
/// Each `TestEnv` creates two temporary directories:
/// - `work_dir`: Working directory for input and output files
/// - `config_dir`: Holds `config.kdl` (via `MINDMAP_CONFIG_DIR` env var)
///
/// The `mindmap()` method returns a `Command` that sets `MINDMAP_CONFIG_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub config_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with isolated directories.
    pub fn new() -> Self {
        Self {
            work_dir: TempDir::new().unwrap(),
            config_dir: TempDir::new().unwrap(),
        }
    }

    /// Get a Command for the mindmap binary with an isolated config directory.
    pub fn mindmap(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_mindmap"));
        cmd.current_dir(self.work_dir.path());
        cmd.env("MINDMAP_CONFIG_DIR", self.config_dir.path());
        cmd.env_remove("MINDMAP_CONFIG");
        cmd.env_remove("MINDMAP_LOG");
        cmd
    }

    /// Write `content` to `name` inside the working directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write the implicit `config.kdl`.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.config_path();
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Path of the implicit `config.kdl` (may not exist).
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.path().join("config.kdl")
    }

    /// Get the path to the working directory.
    pub fn path(&self) -> &Path {
        self.work_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a command's stdout as JSON.
pub fn parse_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).unwrap()
}

/// Assert two coordinates are equal within floating point noise.
pub fn assert_close(actual: &serde_json::Value, expected: f64) {
    let actual = actual.as_f64().unwrap();
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {}, got {}",
        expected,
        actual
    );
}
