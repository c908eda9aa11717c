//! Configuration management for the address book bot.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Everything has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_BIRTHDAY_WINDOW_DAYS;
use std::env;

/// Longest accepted birthday lookahead, in days.
pub const MAX_BIRTHDAY_WINDOW_DAYS: i64 = 365;

/// Runtime configuration for the bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lookahead for the `birthdays` command in days (default: 7)
    pub birthday_window_days: i64,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BOT_BIRTHDAY_WINDOW_DAYS`: birthday lookahead, 0-365 (default: 7)
    /// - `BOT_PROMPT`: input prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let birthday_window_days =
            Self::parse_env_i64("BOT_BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;
        if !(0..=MAX_BIRTHDAY_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BOT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_BIRTHDAY_WINDOW_DAYS),
            });
        }

        let prompt = env::var("BOT_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            birthday_window_days,
            prompt,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: DEFAULT_BIRTHDAY_WINDOW_DAYS,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
