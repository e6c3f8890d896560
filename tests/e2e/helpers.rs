//! Test helper functions for E2E tests

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// An isolated mlsteps environment: empty config, progress file not yet created.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Result<Self> {
        let dir = TempDir::new().context("Failed to create temp directory")?;
        std::fs::write(dir.path().join("config.toml"), "")
            .context("Failed to write config.toml")?;
        Ok(Self { dir })
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("progress.toml")
    }

    pub fn write_config(&self, content: &str) -> Result<()> {
        std::fs::write(self.config_path(), content).context("Failed to write config.toml")
    }

    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).with_context(|| format!("Failed to write {name}"))?;
        Ok(path)
    }

    /// Run mlsteps with the sandbox's config and state files.
    pub fn run(&self, args: &[&str]) -> Result<Output> {
        run_mlsteps(&self.config_path(), &self.state_path(), args)
    }

    pub fn read_state(&self) -> Option<String> {
        std::fs::read_to_string(self.state_path()).ok()
    }
}

pub fn run_mlsteps(config: &Path, state: &Path, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_mlsteps"))
        .args(args)
        .arg("--config")
        .arg(config)
        .arg("--state")
        .arg(state)
        .arg("--no-color")
        .env("NO_COLOR", "1")
        .env_remove("MLSTEPS_CONFIG")
        .env_remove("MLSTEPS_LOG")
        .output()
        .context("Failed to run mlsteps")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Count leaf nodes in a JSON step tree.
pub fn count_json_leaves(node: &serde_json::Value) -> usize {
    match node["children"].as_array() {
        Some(children) if !children.is_empty() => children.iter().map(count_json_leaves).sum(),
        _ => 1,
    }
}
