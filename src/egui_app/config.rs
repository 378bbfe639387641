use std::path::PathBuf;

use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

/// Environment variable overriding the server URL
pub const SERVER_URL_ENV: &str = "RUTAFY_API_URL";

/// Environment variable overriding the session storage directory
pub const STORAGE_DIR_ENV: &str = "RUTAFY_STORAGE_DIR";

/// Application configuration wrapper.
///
/// Layers, lowest first: built-in defaults, `rutafy.toml` in the user's
/// config directory, environment variables.
#[derive(Debug, Clone, Default)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let file = match config_file_path() {
            Some(path) => AppConfig::load(&path)?,
            None => AppConfig::default(),
        };

        let mut env = AppConfig::builder();
        if let Ok(url) = std::env::var(SERVER_URL_ENV) {
            env = env.server_url(url);
        }
        if let Ok(dir) = std::env::var(STORAGE_DIR_ENV) {
            env = env.storage_dir(dir);
        }

        Ok(Self {
            app: file.merge(env.build()?),
        })
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }

    /// Directory for `session.json`; `None` when no platform data directory exists.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.app
            .storage_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("rutafy")))
    }
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("rutafy").join(AppConfig::filename()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.server_url(), "http://localhost:8000");
    }

    #[test]
    fn test_with_builder() {
        let config = Config::with_builder(
            AppConfig::builder()
                .server_url("https://routes.example.org/")
                .storage_dir("/tmp/rutafy-test"),
        )
        .unwrap();
        assert_eq!(config.server_url(), "https://routes.example.org");
        assert_eq!(config.storage_dir(), Some(PathBuf::from("/tmp/rutafy-test")));
    }

    #[test]
    fn test_with_builder_invalid_url() {
        let result = Config::with_builder(AppConfig::builder().server_url("not a url"));
        assert!(result.is_err());
    }
}
