use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments; every value overrides the config file.
#[derive(Debug, Parser)]
#[command(
    name = "infodeck",
    version,
    about = "Terminal dashboard with films, currency and weather panels",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Route to open at start-up (`/`, `/films`, `/converter`, `/weather`).
    #[arg(short, long, value_name = "PATH")]
    pub route: Option<String>,

    /// Background refresh period in seconds.
    #[arg(long, value_name = "SECS")]
    pub refresh_interval_secs: Option<u64>,

    /// Films API key.
    #[arg(long, env = "INFODECK_FILMS_API_KEY", hide_env_values = true)]
    pub films_api_key: Option<String>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
