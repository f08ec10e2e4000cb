//! Homework engine: HTTP access to the review API and the messaging transport.
mod client;
mod notify;
mod types;

pub use client::{EndpointSettings, HomeworkSource, PracticumClient, DEFAULT_ENDPOINT};
pub use notify::{Notifier, TelegramNotifier, TelegramSettings, DEFAULT_TELEGRAM_API};
pub use types::{EndpointError, FetchError, RequestFailure, SendMessageError};
