use homework_core::ConfigError;
use homework_engine::{HomeworkSource, Notifier};
use thiserror::Error;

use crate::config::Config;
use crate::runner::{Clock, PollLoop};

/// Network clients the poll loop talks to.
pub type Clients = (Box<dyn HomeworkSource>, Box<dyn Notifier>);

#[derive(Debug, Error)]
pub enum StartupError {
    /// Fatal: the bot must halt without touching the network.
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build clients: {0:#}")]
    Clients(anyhow::Error),
}

/// Validates configuration, then builds the clients and the loop.
///
/// `connect` is only called once configuration is known to be complete.
pub fn prepare<F>(
    config: Result<Config, ConfigError>,
    clock: Clock,
    connect: F,
) -> Result<PollLoop, StartupError>
where
    F: FnOnce(&Config) -> anyhow::Result<Clients>,
{
    let config = config?;
    let (source, notifier) = connect(&config).map_err(StartupError::Clients)?;
    Ok(PollLoop::new(
        source,
        notifier,
        config.empty_list_policy,
        clock,
    ))
}
