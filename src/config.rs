//! Configuration management for the `br-ids` checker.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file. The library itself needs
//! no configuration; only the binary reads it.

use crate::domain::FormatStyle;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the `br-ids` checker.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,

    /// Style identifiers are echoed in (default: safe)
    pub format_style: FormatStyle,

    /// Input lines longer than this are rejected unparsed (default: 256)
    pub max_input_length: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ID_FORMAT_STYLE`: `plain`, `masked` or `safe` (default: "safe")
    /// - `MAX_INPUT_LENGTH`: Maximum accepted line length (default: 256)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        let format_style = match env::var("ID_FORMAT_STYLE") {
            Ok(val) => val
                .parse::<FormatStyle>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "ID_FORMAT_STYLE".to_string(),
                    reason,
                })?,
            Err(_) => FormatStyle::default(),
        };

        let max_input_length = Self::parse_env_usize("MAX_INPUT_LENGTH", 256)?;
        if max_input_length == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_INPUT_LENGTH".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        Ok(Config {
            log_level,
            format_style,
            max_input_length,
        })
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
            log_level: "error".to_string(),
            format_style: FormatStyle::Safe,
            max_input_length: 256,
        }
    }
}
