//! Error types and utilities for sysgraph

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for sysgraph operations
pub type Result<T> = std::result::Result<T, SysGraphError>;

/// Main error type for sysgraph operations
#[derive(Error, Debug)]
pub enum SysGraphError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input data (non-numeric samples, unusable values)
    #[error("Data error: {message}")]
    Data {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Input series lengths that cannot be combined element-wise
    #[error("Shape mismatch for '{series}': expected {expected} samples, found {actual}")]
    ShapeMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// A series with zero samples where at least one is required
    #[error("Series '{series}' contains no samples")]
    EmptyData { series: String },

    /// Chart rendering and image output errors
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rejected credentials on the messaging API
    #[error("Auth error: {message}")]
    Auth { message: String },

    /// Network transport errors (timeouts, connection failures)
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Payload rejected by the messaging API
    #[error("Delivery error: {message}")]
    Delivery {
        message: String,
        error_code: Option<i64>,
    },
}

impl SysGraphError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new data error
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data {
            message: msg.into(),
            path: None,
            source: None,
        }
    }

    /// Create a new data error referencing the offending file
    pub fn data_at(msg: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Data {
            message: msg.into(),
            path: Some(path.into()),
            source: None,
        }
    }

    /// Create a new shape mismatch error
    pub fn shape_mismatch(series: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            series: series.into(),
            expected,
            actual,
        }
    }

    /// Create a new empty data error
    pub fn empty_data(series: impl Into<String>) -> Self {
        Self::EmptyData {
            series: series.into(),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new auth error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth {
            message: msg.into(),
        }
    }

    /// Create a new network error
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new network error with source
    pub fn network_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Network {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new delivery error
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery {
            message: msg.into(),
            error_code: None,
        }
    }

    /// Create a new delivery error with the remote API's error code
    pub fn delivery_with_code(msg: impl Into<String>, code: i64) -> Self {
        Self::Delivery {
            message: msg.into(),
            error_code: Some(code),
        }
    }
}

// Error conversion implementations for external types

/// Convert from reqwest::Error to SysGraphError
impl From<reqwest::Error> for SysGraphError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::network_with_source("Request timeout", err)
        } else if err.is_connect() {
            Self::network_with_source("Connection failed", err)
        } else {
            Self::network_with_source("Network request failed", err)
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to SysGraphError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for SysGraphError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Chart rendering failed", err)
    }
}
