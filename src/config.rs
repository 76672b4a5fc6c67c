//! Configuration for the address book binary.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file. The library itself needs no configuration; this only drives logging
//! and the input format of the `address-book` executable.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the address book binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (default: "error")
    pub log_level: String,

    /// Field separator for input lines (default: ',')
    pub separator: char,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error (default: "error")
    /// - `ADDRESS_BOOK_SEPARATOR`: single non-digit character (default: ",")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let log_level = match env::var("LOG_LEVEL") {
            Ok(val) => Self::parse_log_level(&val)?,
            Err(_) => "error".to_string(),
        };

        let separator = match env::var("ADDRESS_BOOK_SEPARATOR") {
            Ok(val) => Self::parse_separator(&val)?,
            Err(_) => ',',
        };

        Ok(Config {
            log_level,
            separator,
        })
    }

    fn parse_log_level(val: &str) -> ConfigResult<String> {
        let level = val.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(level)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
            })
        }
    }

    fn parse_separator(val: &str) -> ConfigResult<char> {
        let mut chars = val.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_digit() => Ok(c),
            _ => Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_SEPARATOR".to_string(),
                reason: format!("Must be a single non-digit character, got: {:?}", val),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            separator: ',',
        }
    }
}
