use std::fmt;

use homework_core::ParseError;
use thiserror::Error;

/// Transport or HTTP status failure talking to the homework API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EndpointError {
    #[error("request failed: {reason}")]
    RequestFailed { reason: RequestFailure },
    #[error("bad status {0}")]
    BadStatus(u16),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestFailure {
    Timeout,
    Connect,
    Other(String),
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestFailure::Timeout => write!(f, "timeout"),
            RequestFailure::Connect => write!(f, "connection error"),
            RequestFailure::Other(message) => write!(f, "{message}"),
        }
    }
}

/// Result error of [`crate::HomeworkSource::fetch`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error(transparent)]
    Endpoint(#[from] EndpointError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Delivery failure of the messaging transport.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendMessageError {
    #[error("failed to send message: {0}")]
    Transport(RequestFailure),
    #[error("messaging endpoint returned status {status}{}", describe(.description))]
    BadStatus {
        status: u16,
        description: Option<String>,
    },
    #[error("messaging endpoint rejected message: {0}")]
    Rejected(String),
}

fn describe(description: &Option<String>) -> String {
    description
        .as_deref()
        .map(|text| format!(": {text}"))
        .unwrap_or_default()
}

/// The URL is stripped first: the Bot API puts the token in the request path.
pub(crate) fn classify_reqwest_error(err: reqwest::Error) -> RequestFailure {
    let err = err.without_url();
    if err.is_timeout() {
        return RequestFailure::Timeout;
    }
    if err.is_connect() {
        return RequestFailure::Connect;
    }
    RequestFailure::Other(err.to_string())
}
