mod config;
#[cfg(test)]
mod fakes;
mod logging;
mod runner;
mod startup;

use std::sync::Arc;

use anyhow::Context;
use bot_logging::{bot_critical, bot_info};
use chrono::Utc;
use homework_engine::{
    EndpointSettings, HomeworkSource, Notifier, PracticumClient, TelegramNotifier, TelegramSettings,
};

use config::Config;
use logging::LogSettings;
use runner::RETRY_PERIOD;
use startup::{Clients, StartupError};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // The logger comes up even when configuration fails so the reason lands in the log file.
    let defaults = LogSettings::default();
    logging::initialize(config.as_ref().map_or(&defaults, |config| &config.logging));
    if let Ok(config) = &config {
        bot_info!("Starting homework bot: {:?}", config.credentials);
    }

    let poll_loop = match startup::prepare(config, Arc::new(|| Utc::now().timestamp()), connect) {
        Ok(poll_loop) => poll_loop,
        Err(StartupError::Config(err)) => {
            bot_critical!("{}; refusing to start", err);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    runtime.block_on(poll_loop.run_forever(RETRY_PERIOD));
    Ok(())
}

fn connect(config: &Config) -> anyhow::Result<Clients> {
    let credentials = &config.credentials;
    let source: Box<dyn HomeworkSource> = Box::new(
        PracticumClient::new(EndpointSettings::default(), credentials.practicum_token())
            .context("homework API client")?,
    );
    let notifier: Box<dyn Notifier> = Box::new(
        TelegramNotifier::new(
            TelegramSettings::default(),
            credentials.telegram_token(),
            credentials.telegram_chat_id(),
        )
        .context("Telegram client")?,
    );
    Ok((source, notifier))
}
