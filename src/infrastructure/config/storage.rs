use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const APP_QUALIFIER: &str = "org";
const APP_ORGANIZATION: &str = "infodeck";
const APP_NAME: &str = "infodeck";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No home directory could be resolved.
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    /// Config file exists but could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Locates and reads the configuration file.
///
/// The file is read-only input: nothing is ever written back.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    #[cfg(test)]
    pub(crate) const fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Returns the configuration directory path.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads the application configuration.
    ///
    /// A missing file yields defaults; a malformed file is logged and also
    /// yields defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an existing file cannot be read.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !config_path.exists() {
            info!(path = ?config_path, "Config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&config_path)?;
        match toml::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!(path = ?config_path, "Loaded config file");
                Ok(config)
            }
            Err(e) => {
                warn!(path = ?config_path, error = %e, "Failed to parse config file, using defaults");
                Ok(AppConfig::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_yields_defaults_without_writing() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("infodeck");
        let manager = StorageManager::with_dir(config_dir.clone());

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.refresh_interval_secs, 600);
        assert!(!config_dir.exists());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "refresh_interval_secs = 60\nstart_route = \"/films\"\n",
        )
        .unwrap();

        let config = manager.load_config(None).unwrap();

        assert_eq!(config.refresh_interval_secs, 60);
        assert_eq!(config.start_route, "/films");
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "refresh_interval_secs = [").unwrap();

        let config = manager.load_config(None).unwrap();
        assert_eq!(config.refresh_interval_secs, 600);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "refresh_interval_secs = [");
    }

    #[test]
    fn test_path_override_wins() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");
        fs::write(&custom, "films_api_key = \"abc\"\n").unwrap();

        let config = manager.load_config(Some(&custom)).unwrap();

        assert_eq!(config.films_api_key(), Some("abc"));
    }
}
