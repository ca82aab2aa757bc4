//! Configuration loading
//!
//! TOML config at `<config_dir>/qassist/config.toml`; every field has a
//! default so a missing or partial file still yields a usable `Config`.
//! An unreadable or invalid file logs a warning and falls back to defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::QassistError;

fn default_timeout_secs() -> u64 {
    30
}

/// Agent execution API section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AgentConfig {
    /// Base URL of the agent API; empty means unconfigured
    #[serde(default)]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            base_url: String::new(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub agent: AgentConfig,
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Config, QassistError> {
        toml::from_str(content).map_err(|e| QassistError::Config(e.to_string()))
    }

    /// Load from an explicit path, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Config {
        if !path.exists() {
            return Config::default();
        }
        match std::fs::read_to_string(path).map_err(QassistError::from) {
            Ok(content) => match Config::from_toml(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring invalid config {}: {e}", path.display());
                    Config::default()
                }
            },
            Err(e) => {
                log::warn!("ignoring unreadable config {}: {e}", path.display());
                Config::default()
            }
        }
    }

    /// Load from the default location
    pub fn load() -> Config {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// `<config_dir>/qassist/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("qassist").join("config.toml"))
    }
}
