use std::time::Duration;

use bot_logging::bot_debug;
use serde::{Deserialize, Serialize};

use crate::types::classify_reqwest_error;
use crate::SendMessageError;

pub const DEFAULT_TELEGRAM_API: &str = "https://api.telegram.org";

#[derive(Debug, Clone)]
pub struct TelegramSettings {
    pub api_base: String,
    pub request_timeout: Duration,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_TELEGRAM_API.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Delivers plain-text messages to the user.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, text: &str) -> Result<(), SendMessageError>;
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Envelope every Bot API method answers with.
#[derive(Deserialize)]
struct BotApiReply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// [`Notifier`] using the Telegram Bot API `sendMessage` method.
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    url: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(
        settings: TelegramSettings,
        token: &str,
        chat_id: impl Into<String>,
    ) -> Result<Self, SendMessageError> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SendMessageError::Transport(classify_reqwest_error(err)))?;

        Ok(Self {
            client,
            url: format!("{}/bot{}/sendMessage", settings.api_base.trim_end_matches('/'), token),
            chat_id: chat_id.into(),
        })
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), SendMessageError> {
        bot_debug!("Sending message to chat {}", self.chat_id);

        let response = self
            .client
            .post(&self.url)
            .json(&SendMessageRequest {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|err| SendMessageError::Transport(classify_reqwest_error(err)))?;

        let status = response.status();
        // Error replies carry a description; missing or non-JSON bodies still map by status.
        // A 2xx whose body is not a Bot API envelope counts as delivered: the message was
        // accepted, and treating it as failed would resend it next cycle.
        let reply = response.json::<BotApiReply>().await.ok();

        if !status.is_success() {
            return Err(SendMessageError::BadStatus {
                status: status.as_u16(),
                description: reply.and_then(|reply| reply.description),
            });
        }
        if let Some(BotApiReply { ok: false, description }) = reply {
            return Err(SendMessageError::Rejected(
                description.unwrap_or_else(|| "no description".to_string()),
            ));
        }

        bot_debug!("Message delivered to chat {}", self.chat_id);
        Ok(())
    }
}
