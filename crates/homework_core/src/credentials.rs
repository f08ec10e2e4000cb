use crate::ConfigError;

pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Secrets the bot needs for its whole lifetime.
///
/// Can only be built with all three values present and non-blank, so holding
/// a `Credentials` proves the startup precondition was met.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    practicum_token: String,
    telegram_token: String,
    telegram_chat_id: String,
}

impl Credentials {
    pub fn new(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        telegram_chat_id: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            practicum_token: require(PRACTICUM_TOKEN, practicum_token)?,
            telegram_token: require(TELEGRAM_TOKEN, telegram_token)?,
            telegram_chat_id: require(TELEGRAM_CHAT_ID, telegram_chat_id)?,
        })
    }

    pub fn practicum_token(&self) -> &str {
        &self.practicum_token
    }

    pub fn telegram_token(&self) -> &str {
        &self.telegram_token
    }

    pub fn telegram_chat_id(&self) -> &str {
        &self.telegram_chat_id
    }
}

// Tokens must never end up in logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

fn require(name: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}
