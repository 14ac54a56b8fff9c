//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally loaded from a
//! `.env` file in the working directory.

use crate::domain::Birthday;
use crate::error::{ConfigError, ConfigResult};
use chrono::NaiveDate;
use std::env;

/// Prompt printed before each command when none is configured.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for an assistant session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Prompt printed before reading each command
    pub prompt: String,

    /// Fixed date used as "today" by the `birthdays` command.
    /// The local date is used when unset.
    pub today: Option<NaiveDate>,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `CONTACT_BOOK_TODAY`: Date in `DD.MM.YYYY` format to use as today
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let prompt = env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let today = Self::parse_env_date("CONTACT_BOOK_TODAY")?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            prompt,
            today,
            log_level,
        })
    }

    /// Parse an optional `DD.MM.YYYY` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::parse(val.trim())
                .map(|date| Some(date.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a date in the format DD.MM.YYYY, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            today: None,
            log_level: "warn".to_string(),
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

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
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
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.today, None);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset("CONTACT_BOOK_PROMPT");
        guard.unset("CONTACT_BOOK_TODAY");
        guard.unset("LOG_LEVEL");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert_eq!(config.today, None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_PROMPT", "> ");
        guard.set("CONTACT_BOOK_TODAY", "12.03.2024");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.prompt, "> ");
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_today() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_TODAY", "2024-03-12");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_TODAY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.unset("CONTACT_BOOK_TODAY");
        guard.set("LOG_LEVEL", "  ");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "LOG_LEVEL"
        ));
    }

    #[test]
    #[serial]
    fn test_parse_env_date_missing() {
        let mut guard = EnvGuard::new();
        guard.unset("TEST_DATE_MISSING");

        assert_eq!(Config::parse_env_date("TEST_DATE_MISSING").unwrap(), None);
    }
}
