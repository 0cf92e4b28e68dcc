// Configuration module

mod models;

pub use models::*;

use crate::error::{Result, ViewError};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_config_path())
    }

    /// Load configuration using an explicit config file path.
    pub fn load_from(config_path: &str) -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(config_path).required(false))
            // Override with environment variables (prefix: IMG2TEXT_)
            .add_source(
                Environment::with_prefix("IMG2TEXT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| ViewError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ViewError::Config(e.to_string()))
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".img2text")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
