//! Progress file persistence.
//!
//! The progress file is TOML with one `"<step>" = true|false` entry per line,
//! ordered by step path:
//!
//! ```toml
//! # mlsteps progress
//! 0 = true
//! "5.3.2" = true
//! ```

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::ChecklistState;
use crate::error::ChecklistError;
use crate::fs::{atomic_write, lock_exclusive, locked_read, locked_remove};
use crate::outline::StepPath;

const HEADER: &str = "# mlsteps progress: step id = completed\n";

/// Loads and saves a [`ChecklistState`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the progress file. A missing file yields an empty state.
    pub fn load(&self) -> Result<ChecklistState, ChecklistError> {
        let content = locked_read(&self.path)
            .map_err(|e| ChecklistError::persistence("read", &self.path, e))?;
        self.decode_content(content)
    }

    /// Atomically replace the progress file with `state`.
    pub fn save(&self, state: &ChecklistState) -> Result<(), ChecklistError> {
        let content = self.encode_state(state)?;
        atomic_write(&self.path, &content)
            .map_err(|e| ChecklistError::persistence("write", &self.path, e))?;
        info!(path = %self.path.display(), entries = state.len(), "saved progress");
        Ok(())
    }

    /// Load, change and save under one exclusive lock, so concurrent
    /// updates cannot overwrite each other. Nothing is written when `f`
    /// fails.
    pub fn update<T, F>(&self, f: F) -> Result<T, ChecklistError>
    where
        F: FnOnce(&mut ChecklistState) -> Result<T, ChecklistError>,
    {
        let lock = lock_exclusive(&self.path)
            .map_err(|e| ChecklistError::persistence("write", &self.path, e))?;
        let content = lock
            .read()
            .map_err(|e| ChecklistError::persistence("read", &self.path, e))?;
        let mut state = self.decode_content(content)?;

        let value = f(&mut state)?;

        let content = self.encode_state(&state)?;
        lock.write(&content)
            .map_err(|e| ChecklistError::persistence("write", &self.path, e))?;
        info!(path = %self.path.display(), entries = state.len(), "updated progress");
        Ok(value)
    }

    /// Delete the progress file. Returns whether one existed.
    pub fn clear(&self) -> Result<bool, ChecklistError> {
        let removed = locked_remove(&self.path)
            .map_err(|e| ChecklistError::persistence("remove", &self.path, e))?;
        info!(path = %self.path.display(), removed, "cleared progress");
        Ok(removed)
    }

    fn decode_content(&self, content: Option<String>) -> Result<ChecklistState, ChecklistError> {
        let Some(content) = content else {
            debug!(path = %self.path.display(), "no progress file, starting empty");
            return Ok(ChecklistState::new());
        };

        let state = decode(&content).map_err(|message| {
            ChecklistError::persistence(
                "parse",
                &self.path,
                io::Error::new(io::ErrorKind::InvalidData, message),
            )
        })?;
        debug!(path = %self.path.display(), entries = state.len(), "loaded progress");
        Ok(state)
    }

    fn encode_state(&self, state: &ChecklistState) -> Result<String, ChecklistError> {
        encode(state).map_err(|message| {
            ChecklistError::persistence(
                "encode",
                &self.path,
                io::Error::new(io::ErrorKind::InvalidData, message),
            )
        })
    }
}

fn encode(state: &ChecklistState) -> Result<String, String> {
    let mut table = toml::Table::new();
    for (path, done) in state.entries() {
        table.insert(path.to_string(), toml::Value::Boolean(done));
    }
    let body = toml::to_string(&table).map_err(|e| e.to_string())?;
    Ok(format!("{HEADER}{body}"))
}

fn decode(content: &str) -> Result<ChecklistState, String> {
    let table: toml::Table = toml::from_str(content).map_err(|e| e.to_string())?;

    let mut state = ChecklistState::new();
    for (key, value) in table {
        let path: StepPath = key
            .parse()
            .map_err(|_| format!("invalid step id '{key}'"))?;
        let done = value
            .as_bool()
            .ok_or_else(|| format!("step '{key}' must be true or false"))?;
        state.set(path, done);
    }
    Ok(state)
}
