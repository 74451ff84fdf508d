//! Configuration loading from TOML files

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for papersift
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub pubmed: PubmedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PubmedConfig {
    pub search_url: String,
    pub fetch_url: String,
    pub max_results: u32,
}

impl Default for PubmedConfig {
    fn default() -> Self {
        let defaults = papersift_pubmed::Config::default();
        Self {
            search_url: defaults.search_url,
            fetch_url: defaults.fetch_url,
            max_results: defaults.max_results,
        }
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./papersift.toml (current directory)
    /// 2. ~/.config/papersift/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        // Try current directory first
        let local_config = PathBuf::from("papersift.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        // Try user config directory
        if let Some(config_dir) = directories::ProjectDirs::from("", "", "papersift") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Return defaults if no config found
        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Map the file-level settings onto the pipeline config
    pub fn to_pubmed(&self) -> papersift_pubmed::Config {
        papersift_pubmed::Config {
            search_url: self.pubmed.search_url.clone(),
            fetch_url: self.pubmed.fetch_url.clone(),
            max_results: self.pubmed.max_results,
        }
    }
}
