//! User configuration for mlsteps.
//!
//! The config file is optional TOML:
//!
//! ```toml
//! state_file = "$data$/mlsteps/progress.toml"
//! outline_file = "~/notes/my-steps.md"
//! format = "markdown"
//! color = false
//! progress = true
//! ```
//!
//! Path values expand `~/`, `${VAR}` / `$VAR` environment variables and the
//! `$config$`, `$data$` and `$home$` directory placeholders.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "MLSTEPS_CONFIG";

const APP_DIR: &str = "mlsteps";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "progress.toml";

const KNOWN_KEYS: [&str; 5] = ["state_file", "outline_file", "format", "color", "progress"];

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("Invalid regex pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Progress file location
    #[serde(default)]
    pub state_file: Option<String>,
    /// Outline document replacing the built-in one
    #[serde(default)]
    pub outline_file: Option<String>,
    /// Default format for `show`
    #[serde(default)]
    pub format: Option<String>,
    /// Colored terminal output (defaults to on)
    #[serde(default)]
    pub color: Option<bool>,
    /// Annotate `show` with progress by default
    #[serde(default)]
    pub progress: Option<bool>,
}

impl Config {
    /// Parse config file contents. Unknown keys are logged and ignored.
    pub fn parse(content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(content).context("Invalid config TOML")?;
        for key in table.keys() {
            if !KNOWN_KEYS.contains(&key.as_str()) {
                warn!(key = %key, "ignoring unknown config key");
            }
        }
        let config: Config = toml::from_str(content).context("Invalid config value")?;
        Ok(config)
    }

    /// Load the config file.
    ///
    /// Resolution order: `explicit`, then `$MLSTEPS_CONFIG`, then the
    /// per-user default. A missing explicitly named file is an error; a
    /// missing default file yields the default config.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (Some(path.to_path_buf()), true),
            None => match env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
                Some(value) => (Some(PathBuf::from(value)), true),
                None => (default_config_path(), false),
            },
        };

        let Some(path) = path else {
            debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if required {
                bail!("Config file not found: {}", path.display());
            }
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Progress file path from the config, or the per-user default.
    pub fn state_path(&self) -> PathBuf {
        self.state_file
            .as_deref()
            .map(expand_path)
            .unwrap_or_else(default_state_path)
    }

    /// Outline document path, if the config replaces the built-in outline.
    pub fn outline_path(&self) -> Option<PathBuf> {
        self.outline_file.as_deref().map(expand_path)
    }
}

/// `<config_dir>/mlsteps/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data_dir>/mlsteps/progress.toml`, or `./.mlsteps/progress.toml` when
/// the platform has no data directory.
pub fn default_state_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".mlsteps"))
        .join(STATE_FILE)
}

/// Replace `$config$`, `$data$` and `$home$` with the matching user
/// directories. Unknown or unavailable placeholders are left in place.
pub fn expand_placeholders(path: &str) -> String {
    let dirs = [
        ("$config$", dirs::config_dir()),
        ("$data$", dirs::data_dir()),
        ("$home$", dirs::home_dir()),
    ];

    let mut expanded = path.to_string();
    for (placeholder, dir) in dirs {
        if let Some(dir) = dir {
            expanded = expanded.replace(placeholder, &dir.to_string_lossy());
        }
    }
    expanded
}

/// Expand ~ to home directory in paths
pub fn expand_tilde(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }
    path.to_string()
}

/// Expand ${ENV_VAR} patterns in strings
pub fn expand_env_vars(s: &str) -> String {
    ENV_VAR_RE
        .replace_all(s, |caps: &regex::Captures| {
            let name = caps.get(1).or_else(|| caps.get(2));
            match name.and_then(|n| env::var(n.as_str()).ok()) {
                Some(value) => value,
                // If variable not found, keep original
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Apply every expansion to a configured path.
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(expand_env_vars(&expand_tilde(&expand_placeholders(raw))))
}
