//! Application configuration module
//!
//! Provides the configuration types shared by the client. Values come from
//! an optional `rutafy.toml` file and the builder; environment overrides are
//! applied by [`crate::egui_app::config::Config`].
//!
//! ```toml
//! server_url = "https://routes.example.org"
//! storage_dir = "/var/lib/rutafy"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Base URL of the routes API
    #[serde(default)]
    pub server_url: Option<String>,
    /// Directory holding the persisted session
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "rutafy.toml"
    }

    /// Parse from a TOML string and validate.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let mut config: Self = toml::from_str(s)?;
        config.server_url = config.server_url.map(|url| normalize_url(&url)).transpose()?;
        Ok(config)
    }

    /// Load a config file. A missing file yields the default configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Overlay `other` on top of `self`; set fields in `other` win.
    pub fn merge(self, other: AppConfig) -> Self {
        Self {
            server_url: other.server_url.or(self.server_url),
            storage_dir: other.storage_dir.or(self.storage_dir),
        }
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
    storage_dir: Option<PathBuf>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the session storage directory
    pub fn storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = Some(dir.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let server_url = self.server_url.map(|url| normalize_url(&url)).transpose()?;
        Ok(AppConfig {
            server_url,
            storage_dir: self.storage_dir,
        })
    }
}

/// Accept only absolute http(s) URLs; strip the trailing slash so paths can
/// be appended verbatim.
fn normalize_url(url: &str) -> Result<String, ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(url.to_string()));
    }
    Ok(url.trim_end_matches('/').to_string())
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
