//! # Configuration Module
//!
//! Runtime settings read from the process environment (after `.env` has
//! been loaded by `main`).

use std::fmt;
use std::str::FromStr;

use crate::errors::BotError;

/// Environment variable holding the Telegram bot token
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable selecting the log output format
pub const LOG_FORMAT_ENV_VAR: &str = "LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = BotError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(BotError::StartupConfig(format!(
                "{LOG_FORMAT_ENV_VAR} must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

/// Bot settings
#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub log_format: LogFormat,
}

impl BotConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> Result<Self, BotError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup(TOKEN_ENV_VAR)
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                BotError::StartupConfig(format!("Please set the {TOKEN_ENV_VAR} environment variable"))
            })?;

        let log_format = match lookup(LOG_FORMAT_ENV_VAR) {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bot_token,
            log_format,
        })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("log_format", &self.log_format)
            .finish()
    }
}
