use std::path::PathBuf;
use std::str::FromStr;

use homework_core::{
    ConfigError, Credentials, EmptyListPolicy, PRACTICUM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN,
};
use log::LevelFilter;

use crate::logging::LogSettings;

pub const STRICT_EMPTY: &str = "HOMEWORK_STRICT_EMPTY";
pub const LOG_LEVEL: &str = "HOMEWORK_LOG_LEVEL";
pub const LOG_FILE: &str = "HOMEWORK_LOG_FILE";

/// Settings built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub empty_list_policy: EmptyListPolicy,
    pub logging: LogSettings,
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let credentials = Credentials::new(
            lookup(PRACTICUM_TOKEN),
            lookup(TELEGRAM_TOKEN),
            lookup(TELEGRAM_CHAT_ID),
        )?;

        let empty_list_policy = match optional(&lookup, STRICT_EMPTY) {
            None => EmptyListPolicy::default(),
            Some(value) => parse_strictness(&value).ok_or(ConfigError::Invalid {
                name: STRICT_EMPTY,
                value,
            })?,
        };

        let mut logging = LogSettings::default();
        if let Some(value) = optional(&lookup, LOG_LEVEL) {
            logging.level = LevelFilter::from_str(&value).map_err(|_| ConfigError::Invalid {
                name: LOG_LEVEL,
                value,
            })?;
        }
        if let Some(value) = optional(&lookup, LOG_FILE) {
            logging.file = PathBuf::from(value);
        }

        Ok(Self {
            credentials,
            empty_list_policy,
            logging,
        })
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_strictness(value: &str) -> Option<EmptyListPolicy> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(EmptyListPolicy::Reject),
        "0" | "false" | "no" | "off" => Some(EmptyListPolicy::Allow),
        _ => None,
    }
}
