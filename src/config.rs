//! Configuration management for the address book binary.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the address book is saved to and loaded from
    pub book_path: PathBuf,

    /// How many days ahead counts as an upcoming birthday (default: 7)
    pub upcoming_birthday_days: i64,

    /// Maximum number of fuzzy match results to return (default: 5)
    pub max_match_results: usize,

    /// Fuzzy match confidence threshold (0-100, default: 30)
    pub match_confidence_threshold: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Persistence file (default: "address_book.json")
    /// - `UPCOMING_BIRTHDAY_DAYS`: Upcoming birthday window (default: 7)
    /// - `MAX_MATCH_RESULTS`: Max fuzzy match results (default: 5)
    /// - `MATCH_CONFIDENCE_THRESHOLD`: Min confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => defaults.book_path,
        };

        let upcoming_birthday_days =
            Self::parse_env_i64("UPCOMING_BIRTHDAY_DAYS", defaults.upcoming_birthday_days)?;
        if upcoming_birthday_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: "Must not be negative".to_string(),
            });
        }

        let max_match_results =
            Self::parse_env_usize("MAX_MATCH_RESULTS", defaults.max_match_results)?;
        let match_confidence_threshold = Self::parse_env_u8(
            "MATCH_CONFIDENCE_THRESHOLD",
            defaults.match_confidence_threshold,
        )?;

        if match_confidence_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "MATCH_CONFIDENCE_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            upcoming_birthday_days,
            max_match_results,
            match_confidence_threshold,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
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

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("address_book.json"),
            upcoming_birthday_days: 7,
            max_match_results: 5,
            match_confidence_threshold: 30,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "ADDRESS_BOOK_PATH",
        "UPCOMING_BIRTHDAY_DAYS",
        "MAX_MATCH_RESULTS",
        "MATCH_CONFIDENCE_THRESHOLD",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
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
        assert_eq!(config.book_path, PathBuf::from("address_book.json"));
        assert_eq!(config.upcoming_birthday_days, 7);
        assert_eq!(config.max_match_results, 5);
        assert_eq!(config.match_confidence_threshold, 30);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.json");
        guard.set("UPCOMING_BIRTHDAY_DAYS", "30");
        guard.set("MAX_MATCH_RESULTS", "10");
        guard.set("MATCH_CONFIDENCE_THRESHOLD", "60");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.upcoming_birthday_days, 30);
        assert_eq!(config.max_match_results, 10);
        assert_eq!(config.match_confidence_threshold, 60);
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "ADDRESS_BOOK_PATH"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_negative_birthday_window() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_BIRTHDAY_DAYS", "-1");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "UPCOMING_BIRTHDAY_DAYS")
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_confidence_threshold() {
        let mut guard = EnvGuard::new();
        guard.set("MATCH_CONFIDENCE_THRESHOLD", "150");

        let result = Config::from_env();
        assert!(
            result.is_err(),
            "Config should fail with invalid confidence threshold"
        );
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(
                    var, "MATCH_CONFIDENCE_THRESHOLD",
                    "Should fail on confidence threshold validation"
                );
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_INVALID", "not-a-number");

        assert!(Config::parse_env_usize("TEST_USIZE_INVALID", 10).is_err());
    }
}
