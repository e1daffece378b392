//! Configuration management for the assistant bot.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::book::DEFAULT_BIRTHDAY_WINDOW;
use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default snapshot file, relative to the working directory.
pub const DEFAULT_BOOK_PATH: &str = "address_book.json";

/// Configuration for the assistant bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the address book snapshot is stored (default: address_book.json)
    pub book_path: PathBuf,

    /// Look-ahead for upcoming birthdays in days (default: 7)
    pub upcoming_birthdays_days: u32,

    /// Maximum number of command suggestions (default: 5)
    pub max_suggestions: usize,

    /// Minimum similarity for a fuzzy command suggestion (0-100, default: 60)
    pub suggestion_cutoff: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ASSISTANT_BOOK_PATH`: Snapshot file path (default: address_book.json)
    /// - `UPCOMING_BIRTHDAYS_DAYS`: Birthday look-ahead, 0-365 (default: 7)
    /// - `MAX_SUGGESTIONS`: Max command suggestions, at least 1 (default: 5)
    /// - `SUGGESTION_CUTOFF`: Min suggestion similarity, 0-100 (default: 60)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy never prints, so stdout stays reserved for the REPL
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ASSISTANT_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ASSISTANT_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let upcoming_birthdays_days =
            Self::parse_env_u32("UPCOMING_BIRTHDAYS_DAYS", DEFAULT_BIRTHDAY_WINDOW)?;
        if upcoming_birthdays_days > 365 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
                reason: "Must be between 0 and 365".to_string(),
            });
        }

        let max_suggestions = Self::parse_env_usize("MAX_SUGGESTIONS", 5)?;
        if max_suggestions == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_SUGGESTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let suggestion_cutoff = Self::parse_env_u8("SUGGESTION_CUTOFF", 60)?;
        if suggestion_cutoff > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SUGGESTION_CUTOFF".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            upcoming_birthdays_days,
            max_suggestions,
            suggestion_cutoff,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u8>().map_err(|_| ConfigError::InvalidValue {
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
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            upcoming_birthdays_days: DEFAULT_BIRTHDAY_WINDOW,
            max_suggestions: 5,
            suggestion_cutoff: 60,
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
        "ASSISTANT_BOOK_PATH",
        "UPCOMING_BIRTHDAYS_DAYS",
        "MAX_SUGGESTIONS",
        "SUGGESTION_CUTOFF",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        /// Start from a clean slate for every variable the config reads.
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

    fn invalid_var(result: ConfigResult<Config>) -> String {
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => var,
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.book_path, PathBuf::from("address_book.json"));
        assert_eq!(config.upcoming_birthdays_days, 7);
        assert_eq!(config.max_suggestions, 5);
        assert_eq!(config.suggestion_cutoff, 60);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_BOOK_PATH", "/tmp/contacts.json");
        guard.set("UPCOMING_BIRTHDAYS_DAYS", "14");
        guard.set("MAX_SUGGESTIONS", "3");
        guard.set("SUGGESTION_CUTOFF", "75");

        let config = Config::from_env().unwrap();
        assert_eq!(config.book_path, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.upcoming_birthdays_days, 14);
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.suggestion_cutoff, 75);
    }

    #[test]
    #[serial]
    fn test_config_invalid_window() {
        let mut guard = EnvGuard::new();
        guard.set("UPCOMING_BIRTHDAYS_DAYS", "400");
        assert_eq!(invalid_var(Config::from_env()), "UPCOMING_BIRTHDAYS_DAYS");
    }

    #[test]
    #[serial]
    fn test_config_zero_suggestions() {
        let mut guard = EnvGuard::new();
        guard.set("MAX_SUGGESTIONS", "0");
        assert_eq!(invalid_var(Config::from_env()), "MAX_SUGGESTIONS");
    }

    #[test]
    #[serial]
    fn test_config_invalid_cutoff() {
        let mut guard = EnvGuard::new();
        guard.set("SUGGESTION_CUTOFF", "150");
        assert_eq!(invalid_var(Config::from_env()), "SUGGESTION_CUTOFF");
    }

    #[test]
    #[serial]
    fn test_config_empty_book_path() {
        let mut guard = EnvGuard::new();
        guard.set("ASSISTANT_BOOK_PATH", "  ");
        assert_eq!(invalid_var(Config::from_env()), "ASSISTANT_BOOK_PATH");
    }

    #[test]
    #[serial]
    fn test_parse_env_u32() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32", "42");

        assert_eq!(Config::parse_env_u32("TEST_U32", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_u32("NONEXISTENT", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u32_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_U32_INVALID", "not-a-number");

        assert!(Config::parse_env_u32("TEST_U32_INVALID", 10).is_err());
    }
}
