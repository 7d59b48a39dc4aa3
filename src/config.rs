//! Configuration management for the catvisit engine.
//!
//! This module handles loading and validating configuration from environment
//! variables, with a `.env` file picked up when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the catvisit engine.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the geocoder gateway
    pub geocoder_base_url: String,

    /// Directory holding the persisted settings and appointment records
    pub data_dir: String,

    /// Hard timeout for geocoder requests in seconds (default: 20)
    pub request_timeout: u64,

    /// Reminder scheduler tick interval in seconds (default: 60)
    pub reminder_tick_secs: u64,

    /// Address suggestion cache TTL in minutes (default: 30)
    pub suggestion_cache_ttl_minutes: u64,

    /// Maximum number of address suggestions to return (default: 5)
    pub max_suggestions: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `GEOCODER_BASE_URL`: Base URL of the geocoder gateway
    ///
    /// Optional environment variables:
    /// - `CATVISIT_DATA_DIR`: Data directory (default: "./catvisit-data")
    /// - `REQUEST_TIMEOUT_SECS`: Geocoder timeout in seconds (default: 20)
    /// - `REMINDER_TICK_SECS`: Scheduler tick interval in seconds (default: 60)
    /// - `SUGGESTION_CACHE_TTL_MINUTES`: Suggestion cache TTL (default: 30)
    /// - `MAX_SUGGESTIONS`: Max address suggestions (default: 5)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let geocoder_base_url = env::var("GEOCODER_BASE_URL")
            .map_err(|_| ConfigError::MissingVar("GEOCODER_BASE_URL".to_string()))?;

        if !geocoder_base_url.starts_with("http://") && !geocoder_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "GEOCODER_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let data_dir =
            env::var("CATVISIT_DATA_DIR").unwrap_or_else(|_| "./catvisit-data".to_string());

        if data_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CATVISIT_DATA_DIR".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT_SECS", 20)?;
        let reminder_tick_secs = Self::parse_env_u64("REMINDER_TICK_SECS", 60)?;
        let suggestion_cache_ttl_minutes = Self::parse_env_u64("SUGGESTION_CACHE_TTL_MINUTES", 30)?;
        let max_suggestions = Self::parse_env_usize("MAX_SUGGESTIONS", 5)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        if reminder_tick_secs == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REMINDER_TICK_SECS".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            geocoder_base_url,
            data_dir,
            request_timeout,
            reminder_tick_secs,
            suggestion_cache_ttl_minutes,
            max_suggestions,
            log_level,
        })
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

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
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
            geocoder_base_url: String::new(),
            data_dir: "./catvisit-data".to_string(),
            request_timeout: 20,
            reminder_tick_secs: 60,
            suggestion_cache_ttl_minutes: 30,
            max_suggestions: 5,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout, 20);
        assert_eq!(config.reminder_tick_secs, 60);
        assert_eq!(config.suggestion_cache_ttl_minutes, 30);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.data_dir, "./catvisit-data");
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("GEOCODER_BASE_URL", "not-a-url");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "GEOCODER_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("GEOCODER_BASE_URL", "http://localhost:8080");
        guard.set("REQUEST_TIMEOUT_SECS", "30");
        guard.set("REMINDER_TICK_SECS", "15");

        let result = Config::from_env();
        assert!(result.is_ok(), "Config should be valid: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.geocoder_base_url, "http://localhost:8080");
        assert_eq!(config.request_timeout, 30);
        assert_eq!(config.reminder_tick_secs, 15);
    }

    #[test]
    #[serial]
    fn test_config_zero_timeout_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("GEOCODER_BASE_URL", "http://localhost:8080");
        guard.set("REQUEST_TIMEOUT_SECS", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "REQUEST_TIMEOUT_SECS");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_TICK_SECS", "42");

        let result = Config::parse_env_u64("TEST_TICK_SECS", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT_TICK_SECS", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_TICK_INVALID", "soon");

        let result = Config::parse_env_u64("TEST_TICK_INVALID", 10);
        assert!(result.is_err());
    }
}
