//! Runtime configuration
//!
//! Read from an optional TOML file. Every key has a default, so an empty or
//! missing file is a valid configuration:
//!
//! ```toml
//! data_file = "daybook.txt"
//! default_interval = 7
//! log_filter = "daybook=warn"
//! ```

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::parser::DEFAULT_INTERVAL;

/// Default location of the task data file
pub const DEFAULT_DATA_FILE: &str = "daybook.txt";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "daybook=warn";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Task data file, one record per line
    pub data_file: PathBuf,
    /// Days between recurrences when a command gives no `/interval`
    pub default_interval: u32,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            default_interval: DEFAULT_INTERVAL,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("invalid configuration")?;
        if config.default_interval == 0 {
            bail!("default_interval must be at least 1 day");
        }
        Ok(config)
    }

    /// Load a configuration file; a missing file yields the defaults
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("in {}", path.display()))
    }
}
