use std::time::Duration;

use bot_logging::bot_debug;
use homework_core::{Cursor, ParseError};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;

use crate::types::classify_reqwest_error;
use crate::{EndpointError, FetchError};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

#[derive(Debug, Clone)]
pub struct EndpointSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Source of homework status payloads.
///
/// Implementations make exactly one attempt per call; retrying is left to
/// the poll loop.
#[async_trait::async_trait]
pub trait HomeworkSource: Send + Sync {
    async fn fetch(&self, from_date: Cursor) -> Result<Value, FetchError>;
}

/// [`HomeworkSource`] backed by the homework review HTTP API.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: reqwest::Client,
    settings: EndpointSettings,
    authorization: String,
}

impl PracticumClient {
    pub fn new(settings: EndpointSettings, token: &str) -> Result<Self, EndpointError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| EndpointError::RequestFailed {
                reason: classify_reqwest_error(err),
            })?;

        Ok(Self {
            client,
            settings,
            authorization: format!("OAuth {token}"),
        })
    }
}

#[async_trait::async_trait]
impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: Cursor) -> Result<Value, FetchError> {
        bot_debug!(
            "Requesting homework statuses from {} from_date={}",
            self.settings.endpoint,
            from_date
        );

        let response = self
            .client
            .get(&self.settings.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(EndpointError::BadStatus(status.as_u16()).into());
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let payload = serde_json::from_slice::<Value>(&body)
            .map_err(|err| ParseError::MalformedPayload(err.to_string()))?;

        bot_debug!("Homework API answered with {} bytes", body.len());
        Ok(payload)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> EndpointError {
    EndpointError::RequestFailed {
        reason: classify_reqwest_error(err),
    }
}
