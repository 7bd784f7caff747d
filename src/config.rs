//! Configuration management for the handler binary.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::time::Duration;

/// Configuration for the request handlers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Identity appended to every forwarded message (default: "Scotty")
    pub handler_name: String,

    /// Destination the log sender reports to (default: "http://localhost:8080")
    pub sender_url: String,

    /// Blocking delay for messages ending in `?`, in milliseconds (default: 3000)
    pub slow_path_delay_ms: u64,

    /// Delay before a background unit starts work, in milliseconds (default: 500)
    pub scheduling_delay_ms: u64,

    /// How long the binary waits for each outcome, in seconds (default: 4)
    pub result_timeout_secs: u64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HANDLER_NAME`: Handler identity (default: "Scotty")
    /// - `SENDER_URL`: Sender destination (default: "http://localhost:8080")
    /// - `SLOW_PATH_DELAY_MS`: Slow path delay (default: 3000)
    /// - `SCHEDULING_DELAY_MS`: Background scheduling delay (default: 500)
    /// - `RESULT_TIMEOUT_SECS`: Per-outcome wait (default: 4)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let handler_name = env::var("HANDLER_NAME").unwrap_or(defaults.handler_name);
        if handler_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HANDLER_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let sender_url = env::var("SENDER_URL").unwrap_or(defaults.sender_url);
        if !sender_url.starts_with("http://") && !sender_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "SENDER_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let slow_path_delay_ms =
            Self::parse_env_u64("SLOW_PATH_DELAY_MS", defaults.slow_path_delay_ms)?;
        let scheduling_delay_ms =
            Self::parse_env_u64("SCHEDULING_DELAY_MS", defaults.scheduling_delay_ms)?;
        let result_timeout_secs =
            Self::parse_env_u64("RESULT_TIMEOUT_SECS", defaults.result_timeout_secs)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            handler_name,
            sender_url,
            slow_path_delay_ms,
            scheduling_delay_ms,
            result_timeout_secs,
            log_level,
        })
    }

    /// Slow path delay as a `Duration`.
    pub fn slow_path_delay(&self) -> Duration {
        Duration::from_millis(self.slow_path_delay_ms)
    }

    /// Scheduling delay as a `Duration`.
    pub fn scheduling_delay(&self) -> Duration {
        Duration::from_millis(self.scheduling_delay_ms)
    }

    /// Per-outcome wait as a `Duration`.
    pub fn result_timeout(&self) -> Duration {
        Duration::from_secs(self.result_timeout_secs)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            handler_name: "Scotty".to_string(),
            sender_url: "http://localhost:8080".to_string(),
            slow_path_delay_ms: 3000,
            scheduling_delay_ms: 500,
            result_timeout_secs: 4,
            log_level: "info".to_string(),
        }
    }
}
