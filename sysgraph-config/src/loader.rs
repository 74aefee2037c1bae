//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for sysgraph_common::SysGraphError {
    fn from(err: ConfigError) -> Self {
        sysgraph_common::SysGraphError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a JSON file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_json::from_str(&content)?;

        Self::apply_env_overrides(&mut config)?;

        config.validate_all()?;
        debug!("Configuration loaded from {}", path.as_ref().display());

        Ok(config)
    }

    /// Load configuration from a specific file, mapped into the crate error type
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> sysgraph_common::Result<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        if let Ok(token) = env::var("TELEGRAM_BOT_TOKEN") {
            config.delivery.token = token;
        }

        if let Ok(chat_id) = env::var("TELEGRAM_CHAT_ID") {
            config.delivery.chat_id = chat_id;
        }

        if let Ok(timeout) = env::var("TELEGRAM_TIMEOUT") {
            config.delivery.timeout_secs =
                timeout.parse().map_err(|e| ConfigError::EnvParseError {
                    var: "TELEGRAM_TIMEOUT".to_string(),
                    source: Box::new(e),
                })?;
        }

        if let Ok(dir) = env::var("SYSGRAPH_DATA_DIR") {
            config.data.dir = dir.into();
        }

        if let Ok(output) = env::var("SYSGRAPH_OUTPUT_PATH") {
            config.graph.output_path = output.into();
        }

        if let Ok(bins) = env::var("SYSGRAPH_BINS") {
            config.graph.bins = bins.parse().map_err(|e| ConfigError::EnvParseError {
                var: "SYSGRAPH_BINS".to_string(),
                source: Box::new(e),
            })?;
        }

        if let Ok(level) = env::var("LOG_LEVEL") {
            config.logging.level = level;
        }

        Ok(())
    }
}
