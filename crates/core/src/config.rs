//! Application configuration
//!
//! Values come from `OFFICETRACK_*` variables. Native builds read the process
//! environment (and `.env`); the web build has no environment at runtime and
//! passes its compile-time values through [`AppConfig::from_lookup`].

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::views::meetings::DEFAULT_PAGE_SIZE;

pub const BOT_USERNAME_VAR: &str = "OFFICETRACK_BOT_USERNAME";
pub const DEMO_LOGIN_VAR: &str = "OFFICETRACK_DEMO_LOGIN";
pub const MEETINGS_PAGE_SIZE_VAR: &str = "OFFICETRACK_MEETINGS_PAGE_SIZE";
pub const LOG_LEVEL_VAR: &str = "OFFICETRACK_LOG_LEVEL";

/// Runtime settings for the Mini App
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bot the "open in Telegram" button links to
    pub bot_username: String,

    /// Show the demo login button on the auth screen (default: true)
    pub demo_login_enabled: bool,

    /// Meetings per page (default: 5)
    pub meetings_page_size: usize,

    /// Log level filter (default: info)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bot_username: "your_bot_name".to_string(),
            demo_login_enabled: true,
            meetings_page_size: DEFAULT_PAGE_SIZE,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Missing and empty values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let meetings_page_size = match get(MEETINGS_PAGE_SIZE_VAR) {
            Some(raw) => match parse::<usize>(MEETINGS_PAGE_SIZE_VAR, &raw)? {
                0 => return Err(invalid(MEETINGS_PAGE_SIZE_VAR, &raw)),
                size => size,
            },
            None => defaults.meetings_page_size,
        };

        Ok(Self {
            bot_username: get(BOT_USERNAME_VAR).unwrap_or(defaults.bot_username),
            demo_login_enabled: get(DEMO_LOGIN_VAR)
                .map(|raw| parse_bool(DEMO_LOGIN_VAR, &raw))
                .transpose()?
                .unwrap_or(defaults.demo_login_enabled),
            meetings_page_size,
            log_level: get(LOG_LEVEL_VAR).unwrap_or(defaults.log_level),
        })
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse<T: FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| invalid(key, raw))
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(invalid(key, raw)),
    }
}
