//! Driver configuration loaded from TOML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dugout_core::{Game, Schedule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};

/// Contents of `dugout.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DugoutConfig {
    /// Grouped JSON player catalog.
    pub catalog: PathBuf,

    /// Default session file for `play`.
    pub session: Option<PathBuf>,

    /// Tracing filter used when `RUST_LOG` is unset.
    pub log: String,

    /// Output format.
    pub format: OutputFormat,

    /// Replacement for the built-in pool-play schedule.
    pub schedule: Option<Vec<Game>>,
}

impl Default for DugoutConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("data/roster.json"),
            session: None,
            log: "info".to_string(),
            format: OutputFormat::Text,
            schedule: None,
        }
    }
}

impl DugoutConfig {
    /// Loads the file if it exists, else the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Parses configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(catalog) = &cli.catalog {
            self.catalog.clone_from(catalog);
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }

    /// The schedule override, or the built-in one.
    pub fn schedule(&self) -> Result<Schedule> {
        match &self.schedule {
            Some(games) => Schedule::new(games.clone()).context("invalid schedule in config"),
            None => Ok(Schedule::pool_play()),
        }
    }
}
