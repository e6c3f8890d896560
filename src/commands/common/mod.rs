//! State shared across command implementations.
//!
//! Every command starts from a [`Context`]: the resolved configuration, the
//! loaded outline and the progress store, built from global CLI options.

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use tracing::debug;

use crate::config::Config;
use crate::outline::{self, Step};
use crate::tracker::{ChecklistState, ProgressStore, Tracker};

/// Options accepted by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub state: Option<PathBuf>,
    pub outline: Option<PathBuf>,
    pub no_color: bool,
}

pub struct Context {
    pub config: Config,
    pub outline: Step,
    pub store: ProgressStore,
}

impl Context {
    /// Resolve config, outline and progress file. CLI options take
    /// precedence over the config file.
    pub fn open(options: &GlobalOptions) -> Result<Self> {
        let config = Config::load(options.config.as_deref())?;

        if options.no_color || config.color == Some(false) {
            colored::control::set_override(false);
        }

        let outline = match options.outline.clone().or_else(|| config.outline_path()) {
            Some(path) => outline::load_from(&path)
                .with_context(|| format!("Failed to load outline: {}", path.display()))?,
            None => outline::load().context("Failed to load built-in outline")?,
        };

        let state_path = options.state.clone().unwrap_or_else(|| config.state_path());
        debug!(state = %state_path.display(), "resolved progress file");

        Ok(Self {
            config,
            outline,
            store: ProgressStore::new(state_path),
        })
    }

    pub fn tracker(&self) -> Tracker<'_> {
        Tracker::new(&self.outline)
    }

    /// Load saved progress, dropping entries for steps the outline lacks.
    pub fn load_state(&self) -> Result<ChecklistState> {
        let mut state = self.store.load()?;
        self.tracker().prune(&mut state);
        Ok(state)
    }
}
