use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,
    #[serde(default)]
    pub branch: BranchConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// Which remote to resolve (default: "origin")
    #[serde(default = "default_remote_name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BranchConfig {
    /// Branch used when the checked-out one can't be resolved (default: "main")
    #[serde(default = "default_fallback_branch")]
    pub fallback: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            name: default_remote_name(),
        }
    }
}

impl Default for BranchConfig {
    fn default() -> Self {
        Self {
            fallback: default_fallback_branch(),
        }
    }
}

fn default_remote_name() -> String {
    "origin".to_string()
}

fn default_fallback_branch() -> String {
    "main".to_string()
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("reveal");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or return default
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}
