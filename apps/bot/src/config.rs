//! Application configuration.

use memewatch_screener::ScreenerConfig;
use std::time::Duration;
use thiserror::Error;

/// Required environment variables.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub const USER_ID_VAR: &str = "USER_ID";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("environment variable is set but empty: {0}")]
    EmptyVar(&'static str),
}

/// Telegram credentials, read once at startup.
#[derive(Debug, Clone)]
pub struct TelegramSettings {
    /// Bot token
    pub token: String,
    /// Recipient user or chat id
    pub user_id: String,
}

/// Immutable application configuration, built once at startup and passed to
/// the polling loop.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Telegram credentials.
    pub telegram: TelegramSettings,
    /// Screening thresholds.
    pub screener: ScreenerConfig,
    /// Delay after a clean polling cycle.
    pub poll_interval: Duration,
    /// Shortened delay after a failed polling cycle.
    pub retry_interval: Duration,
}

impl AppConfig {
    /// Build configuration from process environment variables.
    ///
    /// Missing or empty `TELEGRAM_TOKEN` / `USER_ID` is fatal; runtime
    /// errors never are, so this is the only place the process refuses to
    /// start.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an injected variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = require(&lookup, TELEGRAM_TOKEN_VAR)?;
        let user_id = require(&lookup, USER_ID_VAR)?;

        Ok(Self {
            telegram: TelegramSettings { token, user_id },
            screener: ScreenerConfig::default(),
            poll_interval: Duration::from_secs(300),
            retry_interval: Duration::from_secs(60),
        })
    }
}

fn require<F>(lookup: &F, var: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).ok_or(ConfigError::MissingVar(var))?;
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyVar(var));
    }
    Ok(value)
}
