//! Configuration management for the LMS admin console

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    pub api: ApiConfig,

    /// Console web server configuration
    pub server: ServerConfig,

    /// Durable client-state storage configuration
    pub storage: StorageConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the LMS backend, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds for administrative calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Console web server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Durable client-state storage configuration
///
/// Holds the only state that survives a restart: the bearer token and the
/// theme preference, persisted as a flat key-value file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where the state file lives
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json or text)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_base_url() -> String {
    "https://lms-backend-flwq.onrender.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

const fn default_port() -> u16 {
    8080
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Config {
    /// Load configuration from environment and files
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("LMS").separator("_"))
            .build()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })?;

        config
            .try_deserialize()
            .map_err(|e| crate::Error::Configuration {
                message: e.to_string(),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        let base_url = std::env::var("LMS_API_BASE_URL").unwrap_or_else(|_| default_base_url());

        Self {
            api: ApiConfig {
                base_url,
                timeout_secs: default_timeout_secs(),
            },
            server: ServerConfig {
                host: default_host(),
                port: default_port(),
            },
            storage: StorageConfig {
                state_dir: PathBuf::from(
                    std::env::var("LMS_STORAGE_STATE_DIR").unwrap_or_else(|_| "./data".to_string()),
                ),
            },
            logging: LoggingConfig {
                level: default_log_level(),
                format: default_log_format(),
            },
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::field_reassign_with_default, clippy::uninlined_format_args)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert!(config.api.base_url.starts_with("http"));
        assert!(!config.api.base_url.ends_with('/'));
        assert_eq!(config.api.timeout_secs, 10);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);

        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: Config = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized.api.base_url, config.api.base_url);
        assert_eq!(deserialized.api.timeout_secs, config.api.timeout_secs);
        assert_eq!(deserialized.server.port, config.server.port);
        assert_eq!(deserialized.storage.state_dir, config.storage.state_dir);
    }

    #[test]
    fn test_partial_config_deserialization() {
        let json_str = r#"{
            "api": {"base_url": "http://localhost:9000"},
            "server": {"host": "localhost"},
            "storage": {},
            "logging": {}
        }"#;

        let config: Config = serde_json::from_str(json_str).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:9000");
        assert_eq!(config.api.timeout_secs, 10); // Uses default
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.server.port, 8080); // Uses default
        assert_eq!(config.storage.state_dir, PathBuf::from("./data"));
    }

    #[test]
    fn test_default_value_functions() {
        assert_eq!(default_timeout_secs(), 10);
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 8080);
        assert_eq!(default_state_dir(), PathBuf::from("./data"));
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_format(), "text");
    }
}
