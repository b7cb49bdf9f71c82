//! Configuration management for the contact assistant.
//!
//! Loads optional settings from environment variables. The assistant
//! keeps stdout as a clean command transcript, so logging defaults to
//! `error` and goes to stderr.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration for the assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level filter (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level filter (default: "error")
    ///
    /// A `.env` file is loaded if present; its absence is not an error.
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy doesn't print to stdout, so the transcript stays clean
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "LOG_LEVEL".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(val) => val,
            Err(_) => "error".to_string(),
        };

        Ok(Config { log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_log_level_default() {
        env::remove_var("LOG_LEVEL");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_log_level_from_env() {
        env::set_var("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        env::remove_var("LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn test_log_level_rejects_empty() {
        env::set_var("LOG_LEVEL", "  ");
        let result = Config::from_env();
        assert!(result.is_err());
        env::remove_var("LOG_LEVEL");
    }
}
