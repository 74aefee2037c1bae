//! Telegram Bot API client for report delivery
//!
//! This module provides a small HTTP client for the two Bot API operations a
//! report run needs: uploading the chart as a photo and sending the summary
//! text. Failures are classified into auth, network and delivery errors and
//! propagate to the caller; there is no local retry.

use crate::error::{Result, SysGraphError};
use reqwest::{multipart, Client, Response, StatusCode};
use serde::Deserialize;
use serde_json::json;
use std::{path::Path, time::Duration};
use tracing::{debug, info, instrument};

/// Configuration for the Telegram Bot API client
#[derive(Clone)]
pub struct TelegramConfig {
    /// Base URL of the Bot API (default: "https://api.telegram.org")
    pub api_base: String,
    /// Bot token for authentication
    pub token: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.telegram.org".to_string(),
            token: String::new(),
            timeout_secs: 30,
        }
    }
}

// The token is a credential; keep it out of Debug output and logs.
impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("api_base", &self.api_base)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TelegramConfig {
    /// Create a new configuration with the given bot token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Set the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Telegram Bot API client with bounded per-call timeouts
#[derive(Debug, Clone)]
pub struct TelegramClient {
    client: Client,
    config: TelegramConfig,
}

impl TelegramClient {
    /// Create a new Telegram client with the given configuration
    pub fn new(config: TelegramConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(SysGraphError::auth("Bot token must not be empty"));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SysGraphError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    pub fn with_defaults(token: impl Into<String>) -> Result<Self> {
        Self::new(TelegramConfig::new(token))
    }

    /// Build the URL for a Bot API method
    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.token,
            method
        )
    }

    /// Upload a photo from the local filesystem to the target chat
    #[instrument(skip(self), fields(chat_id = %chat_id, path = %path.as_ref().display()))]
    pub async fn send_photo(&self, chat_id: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        debug!("Uploading photo attachment");

        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "photo.png".to_string());

        let form = multipart::Form::new()
            .text("chat_id", chat_id.to_string())
            .part("photo", multipart::Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(self.method_url("sendPhoto"))
            .multipart(form)
            .send()
            .await?;

        self.check_response("sendPhoto", response).await?;
        info!("Photo delivered");
        Ok(())
    }

    /// Send a text message to the target chat
    #[instrument(skip(self, text), fields(chat_id = %chat_id))]
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        debug!("Sending text message");

        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&json!({ "chat_id": chat_id, "text": text }))
            .send()
            .await?;

        self.check_response("sendMessage", response).await?;
        info!("Message delivered");
        Ok(())
    }

    /// Classify a Bot API response, turning rejections into typed errors
    async fn check_response(&self, method: &str, response: Response) -> Result<()> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(SysGraphError::auth(format!(
                "{} rejected the bot token ({})",
                method, status
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| SysGraphError::network_with_source("Failed to read response body", e))?;

        match serde_json::from_str::<TelegramResponse>(&text) {
            Ok(envelope) if envelope.is_success() => {
                debug!("{} acknowledged", method);
                Ok(())
            }
            Ok(envelope) => {
                let message = format!(
                    "{} failed: {}",
                    method,
                    envelope.error_message().unwrap_or("no description")
                );
                Err(match envelope.error_code {
                    Some(code) => SysGraphError::delivery_with_code(message, code),
                    None => SysGraphError::delivery(message),
                })
            }
            // Proxies can answer with non-JSON bodies on 5xx.
            Err(_) if !status.is_success() => Err(SysGraphError::delivery_with_code(
                format!("{} failed with HTTP {}", method, status),
                i64::from(status.as_u16()),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

/// Response envelope returned by every Bot API method
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramResponse {
    /// Whether the call succeeded
    pub ok: bool,
    /// Error description, present on failures
    pub description: Option<String>,
    /// Numeric error code, present on failures
    pub error_code: Option<i64>,
    /// Method-specific payload; unused by this client
    pub result: Option<serde_json::Value>,
}

impl TelegramResponse {
    /// Check if the response indicates success
    pub fn is_success(&self) -> bool {
        self.ok
    }

    /// Get the error description, if any
    pub fn error_message(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
