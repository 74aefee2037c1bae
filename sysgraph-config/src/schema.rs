//! Configuration schema for the sysgraph Telegram bot

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::Validate;

/// Complete application configuration
///
/// The JSON config file carries the two required credential fields at the top
/// level (`token`, `chatID`); everything else is optional with defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Config {
    /// Delivery credentials (top-level `token` / `chatID` JSON fields)
    #[serde(flatten)]
    #[validate]
    pub delivery: DeliverySection,

    /// Input data location
    #[serde(default)]
    #[validate]
    pub data: DataSection,

    /// Chart output and dimensions
    #[serde(default)]
    #[validate]
    pub graph: GraphSection,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSection,
}

impl Config {
    /// Validate the whole configuration tree
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}

/// Messaging API credentials and endpoint settings
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct DeliverySection {
    /// Bot API token
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,

    /// Destination chat identifier
    #[serde(rename = "chatID")]
    #[validate(length(min = 1, message = "chatID must not be empty"))]
    pub chat_id: String,

    /// Bot API base URL
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-call request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    #[validate(range(min = 1, max = 600, message = "Timeout must be between 1 and 600 seconds"))]
    pub timeout_secs: u64,
}

// Credentials must never reach logs through Debug formatting.
impl std::fmt::Debug for DeliverySection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliverySection")
            .field("token", &"<redacted>")
            .field("chat_id", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Location of the pre-collected metric series
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DataSection {
    /// Directory holding the series text files
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
}

impl Default for DataSection {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
        }
    }
}

/// Chart artifact settings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GraphSection {
    /// Output path of the rendered figure; overwritten on every run
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Histogram bin count shared by all panels
    #[serde(default = "default_bins")]
    #[validate(range(min = 1, max = 1000, message = "Bin count must be between 1 and 1000"))]
    pub bins: usize,

    /// Figure width in pixels (10 in at 400 DPI by default)
    #[serde(default = "default_figure_px")]
    #[validate(range(min = 100, max = 8000, message = "Width must be between 100 and 8000 pixels"))]
    pub width: u32,

    /// Figure height in pixels
    #[serde(default = "default_figure_px")]
    #[validate(range(min = 100, max = 8000, message = "Height must be between 100 and 8000 pixels"))]
    pub height: u32,
}

impl Default for GraphSection {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            bins: default_bins(),
            width: default_figure_px(),
            height: default_figure_px(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Log level filter
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Optional log file path
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_api_base() -> String {
    "https://api.telegram.org".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./plot.png")
}

fn default_bins() -> usize {
    40
}

fn default_figure_px() -> u32 {
    4000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let json = r#"{"token": "123:abc", "chatID": "42"}"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.delivery.token, "123:abc");
        assert_eq!(config.delivery.chat_id, "42");
        assert_eq!(config.delivery.api_base, "https://api.telegram.org");
        assert_eq!(config.delivery.timeout_secs, 30);
        assert_eq!(config.data.dir, PathBuf::from("./data"));
        assert_eq!(config.graph.output_path, PathBuf::from("./plot.png"));
        assert_eq!(config.graph.bins, 40);
        assert_eq!(config.graph.width, 4000);
        assert_eq!(config.graph.height, 4000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"token": "123:abc"}"#;
        let result: Result<Config, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_full_config() {
        let json = r#"{
            "token": "123:abc",
            "chatID": "42",
            "data": {"dir": "/var/lib/sysgraph/data"},
            "graph": {"output_path": "/tmp/health.png", "bins": 20, "width": 1000, "height": 1000},
            "logging": {"level": "debug"}
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();

        assert_eq!(config.data.dir, PathBuf::from("/var/lib/sysgraph/data"));
        assert_eq!(config.graph.output_path, PathBuf::from("/tmp/health.png"));
        assert_eq!(config.graph.bins, 20);
        assert_eq!(config.logging.level, "debug");
        assert!(config.validate_all().is_ok());
    }

    #[test]
    fn test_empty_token_fails_validation() {
        let json = r#"{"token": "", "chatID": "42"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_zero_bins_fails_validation() {
        let json = r#"{"token": "123:abc", "chatID": "42", "graph": {"bins": 0}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.validate_all().is_err());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let json = r#"{"token": "123:secret", "chatID": "private-chat"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("123:secret"));
        assert!(!debug.contains("private-chat"));
        assert!(debug.contains("<redacted>"));
    }
}
