//! Application configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::args::CliArgs;
use crate::domain::Route;

const APP_NAME: &str = "infodeck";
const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "infodeck";

const MIN_REFRESH_INTERVAL_SECS: u64 = 10;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from TOML and overridden by CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(default)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Background refresh period for the currency and weather panels.
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,

    /// Key sent as `X-API-KEY` to the films API.
    #[serde(default)]
    pub films_api_key: Option<String>,

    /// Route path shown at start-up.
    #[serde(default = "default_start_route")]
    pub start_route: String,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Upstream endpoints.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Upstream endpoint configuration.
///
/// Only the endpoint is configurable; each panel appends its own fixed query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Exchange rates endpoint for USD.
    #[serde(default = "default_currency_url")]
    pub currency_url: String,

    /// Movie search endpoint.
    #[serde(default = "default_films_url")]
    pub films_url: String,

    /// Forecast endpoint.
    #[serde(default = "default_weather_url")]
    pub weather_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            currency_url: default_currency_url(),
            films_url: default_films_url(),
            weather_url: default_weather_url(),
        }
    }
}

fn default_refresh_interval_secs() -> u64 {
    600
}

fn default_start_route() -> String {
    Route::Home.path().to_string()
}

fn default_accent_color() -> String {
    "#7c5cff".to_string()
}

fn default_currency_url() -> String {
    "https://open.er-api.com/v6/latest/USD".to_string()
}

fn default_films_url() -> String {
    "https://api.poiskkino.dev/v1.4/movie".to_string()
}

fn default_weather_url() -> String {
    "https://api.open-meteo.com/v1/forecast".to_string()
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(refresh_interval_secs) = args.refresh_interval_secs {
            self.refresh_interval_secs = refresh_interval_secs;
        }
        if let Some(films_api_key) = args.films_api_key {
            self.films_api_key = Some(films_api_key);
        }
        if let Some(route) = args.route {
            self.start_route = route;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
    }

    /// Returns the start-up route; unknown paths resolve to home.
    #[must_use]
    pub fn start_route(&self) -> Route {
        Route::from_path(&self.start_route)
    }

    /// Returns the refresh period, clamped to a sane minimum.
    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs.max(MIN_REFRESH_INTERVAL_SECS))
    }

    /// Returns the films API key, ignoring blank values.
    #[must_use]
    pub fn films_api_key(&self) -> Option<&str> {
        self.films_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default config file path.
    #[must_use]
    pub fn default_config_path() -> Option<PathBuf> {
        Self::default_config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("infodeck.log"))
    }

    /// Returns effective config path.
    #[must_use]
    pub fn effective_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(Self::default_config_path)
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            refresh_interval_secs: default_refresh_interval_secs(),
            films_api_key: None,
            start_route: default_start_route(),
            theme: ThemeConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_partial_config() {
        let toml_content = r##"
            refresh_interval_secs = 120
            films_api_key = "KEY-123"
            start_route = "/weather"

            [theme]
            accent_color = "#ff8800"

            [api]
            weather_url = "http://localhost:8080/forecast"
        "##;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.refresh_interval(), Duration::from_secs(120));
        assert_eq!(config.films_api_key(), Some("KEY-123"));
        assert_eq!(config.start_route(), Route::Weather);
        assert_eq!(config.theme.accent_color, "#ff8800");
        assert_eq!(config.api.weather_url, "http://localhost:8080/forecast");
        assert_eq!(config.api.currency_url, default_currency_url());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.refresh_interval(), Duration::from_secs(600));
        assert_eq!(config.films_api_key(), None);
        assert_eq!(config.start_route(), Route::Home);
    }

    #[test]
    fn test_blank_api_key_is_ignored() {
        let config = AppConfig {
            films_api_key: Some("   ".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.films_api_key(), None);
    }

    #[test]
    fn test_refresh_interval_is_clamped() {
        let config = AppConfig {
            refresh_interval_secs: 0,
            ..AppConfig::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_secs(10));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig {
            refresh_interval_secs: 120,
            ..AppConfig::default()
        };
        let args = CliArgs::parse_from([
            "infodeck",
            "--route",
            "/converter",
            "--refresh-interval-secs",
            "30",
            "--films-api-key",
            "CLI-KEY",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.start_route(), Route::Converter);
        assert_eq!(config.refresh_interval(), Duration::from_secs(30));
        assert_eq!(config.films_api_key(), Some("CLI-KEY"));
    }
}
