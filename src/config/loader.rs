use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `backend.url`.
pub const ENV_BACKEND_URL: &str = "BACKEND_URL";
/// Environment variable overriding `backend.enabled` (`1`, `true`, `yes`).
pub const ENV_USE_BACKEND: &str = "USE_BACKEND";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Directory holding the config file and the compose log.
    ///
    /// Uses `~/.config/replydraft` on Unix or the platform equivalent via
    /// `dirs::config_dir()`, falling back to the current directory.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("replydraft")
    }

    /// Returns the path to the default configuration file.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Loads the default config file, or defaults when it does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            let config = Config::default();
            config.validate()?;
            return Ok(config);
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies `BACKEND_URL` / `USE_BACKEND` from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an arbitrary lookup.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|v| !v.trim().is_empty()) {
            self.backend.url = url.trim().to_string();
        }
        if let Some(flag) = lookup(ENV_USE_BACKEND) {
            self.backend.enabled = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes"
            );
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `server.bind_addr` is a socket address
    /// - `client.endpoint` is an http(s) URL
    /// - `backend.url` is an http(s) URL when the backend is enabled
    /// - backend timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server
            .bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::ValidationError {
                message: format!("Invalid bind address '{}': {}", self.server.bind_addr, e),
            })?;

        validate_url("client.endpoint", &self.client.endpoint)?;

        if self.backend.enabled {
            validate_url("backend.url", &self.backend.url)?;
        }

        if self.backend.timeout_seconds == 0 || self.backend.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Backend timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

fn validate_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = reqwest::Url::parse(value).map_err(|e| ConfigError::ValidationError {
        message: format!("Invalid {} '{}': {}", field, value, e),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            message: format!("{} must use http or https, got '{}'", field, url.scheme()),
        });
    }
    Ok(())
}
