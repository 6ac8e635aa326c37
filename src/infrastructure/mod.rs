//! Infrastructure layer with external service adapters.

/// Panel feeds for the upstream APIs.
pub mod api;
/// Application configuration.
pub mod config;
/// HTTP transport.
pub mod http_client;

pub use api::{CurrencyFeed, FilmsFeed, WeatherFeed};
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use http_client::ReqwestHttpClient;
