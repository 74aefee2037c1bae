//! Configuration management for the sysgraph Telegram bot

pub mod loader;
pub mod schema;

pub use loader::{ConfigError, ConfigLoader};
pub use schema::{Config, DataSection, DeliverySection, GraphSection, LoggingSection};
