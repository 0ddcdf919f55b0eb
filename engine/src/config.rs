//! Configuration management for the AquaCrop Planner engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AQUACROP_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Storage configuration
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding the persisted history blob
    pub data_dir: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> AppResult<Self> {
        let environment =
            std::env::var("AQUACROP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        Self::build(environment).map_err(|e| AppError::Configuration(e.to_string()))
    }

    fn build(environment: String) -> Result<Self, ConfigError> {
        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("storage.data_dir", "./data")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AQUACROP_ prefix)
            .add_source(
                Environment::with_prefix("AQUACROP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_files_or_env() {
        let config = Config::build("development".to_string()).unwrap();
        assert_eq!(config.environment, "development");
        assert_eq!(config.storage.data_dir, "./data");
    }
}
