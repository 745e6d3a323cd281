//! Application configuration file
//!
//! JSON file with every field optional:
//!
//! ```json
//! {
//!   "http": { "host": "0.0.0.0", "port": 8000, "cors_origins": [] },
//!   "seed_records": true,
//!   "log_level": "info"
//! }
//! ```

use std::fs;
use std::path::Path;

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};
use crate::http_server::HttpServerConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener and CORS settings
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Start each store with one seed record (default: true)
    #[serde(default = "default_seed_records")]
    pub seed_records: bool,

    /// Default log level when RUST_LOG is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed_records() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http: HttpServerConfig::default(),
            seed_records: default_seed_records(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate field values that serde cannot check
    pub fn validate(&self) -> CliResult<()> {
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        if self.http.host.trim().is_empty() {
            return Err(CliError::config_error("http.host must not be empty"));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(CliError::config_error(format!(
                "Invalid log_level: '{}'. Expected one of: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        for origin in &self.http.cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(CliError::config_error(format!(
                    "Invalid CORS origin: '{}'",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Pretty JSON form written by `init`
    pub fn to_pretty_json(&self) -> CliResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("msgboard.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{}");
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_http_section() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            &tmp,
            r#"{"http": {"port": 9001, "cors_origins": ["http://localhost:5173"]}, "seed_records": false}"#,
        );
        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.http.port, 9001);
        assert_eq!(config.http.host, "0.0.0.0");
        assert_eq!(config.http.cors_origins, vec!["http://localhost:5173"]);
        assert!(!config.seed_records);
    }

    #[test]
    fn test_zero_port_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, r#"{"http": {"port": 0}}"#);
        let err = AppConfig::load(&path).unwrap_err();
        assert_eq!(err.code_str(), "MSGBOARD_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = AppConfig {
            log_level: "loud".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let mut config = AppConfig::default();
        config.http.cors_origins = vec!["http://bad\norigin".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "{not json");
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = AppConfig::load_or_default(&tmp.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_pretty_json_round_trips() {
        let config = AppConfig::default();
        let json = config.to_pretty_json().unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
