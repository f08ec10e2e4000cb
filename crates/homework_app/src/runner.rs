use std::sync::Arc;
use std::time::Duration;

use bot_logging::{bot_debug, bot_error, bot_info, bot_warn, set_cycle};
use homework_core::{
    format_status, update, validate_response, Cursor, Effect, EmptyListPolicy, HomeworkError,
    Msg, Notification, PollState, ShapeError,
};
use homework_engine::{EndpointError, FetchError, HomeworkSource, Notifier};
use thiserror::Error;

/// Pause between two cycles, successful or not.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

/// Current Unix time, injectable for tests.
pub type Clock = Arc<dyn Fn() -> Cursor + Send + Sync>;

/// Everything that can end a cycle early.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("endpoint error: {0}")]
    Endpoint(#[from] EndpointError),
    #[error(transparent)]
    Homework(#[from] HomeworkError),
}

impl From<FetchError> for CycleError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Endpoint(err) => CycleError::Endpoint(err),
            FetchError::Parse(err) => CycleError::Homework(err.into()),
        }
    }
}

impl From<ShapeError> for CycleError {
    fn from(err: ShapeError) -> Self {
        CycleError::Homework(err.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    NoNewWork,
    /// Status text matches the last delivered one.
    StatusUnchanged,
    StatusSent,
    StatusNotDelivered,
    Failed { error: String, reported: bool },
}

struct StatusUpdate {
    message: String,
    current_date: Option<Cursor>,
}

/// Drives fetch, validate, format and notify once per cycle.
pub struct PollLoop {
    source: Box<dyn HomeworkSource>,
    notifier: Box<dyn Notifier>,
    policy: EmptyListPolicy,
    clock: Clock,
    state: PollState,
    cycle: u64,
}

impl PollLoop {
    /// Creates a loop whose cursor starts at the current time.
    pub fn new(
        source: Box<dyn HomeworkSource>,
        notifier: Box<dyn Notifier>,
        policy: EmptyListPolicy,
        clock: Clock,
    ) -> Self {
        let state = PollState::new(clock());
        Self {
            source,
            notifier,
            policy,
            clock,
            state,
            cycle: 0,
        }
    }

    pub fn state(&self) -> &PollState {
        &self.state
    }

    /// Never returns; only process termination stops the loop.
    pub async fn run_forever(mut self, retry_period: Duration) {
        bot_info!(
            "Polling from {} every {}s",
            self.state().cursor(),
            retry_period.as_secs()
        );
        loop {
            let outcome = self.run_cycle().await;
            bot_debug!("Cycle finished: {:?}", outcome);
            tokio::time::sleep(retry_period).await;
        }
    }

    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.cycle += 1;
        set_cycle(self.cycle);

        let cursor = self.state.cursor();
        let mut failure = None;
        let msg = match self.poll(cursor).await {
            Ok(None) => {
                bot_debug!("No new info since {}", cursor);
                self.dispatch(Msg::NoNewWork);
                return CycleOutcome::NoNewWork;
            }
            Ok(Some(status)) => Msg::StatusChanged {
                message: status.message,
                advance_to: status.current_date.unwrap_or_else(|| (self.clock)()),
            },
            Err(err) => {
                log_failure(&err);
                let error = err.to_string();
                failure = Some(error.clone());
                Msg::CycleFailed { error }
            }
        };

        let mut delivered = None;
        for effect in self.dispatch(msg) {
            match effect {
                Effect::Notify(notification) => {
                    delivered = Some(self.deliver(notification).await);
                }
            }
        }

        if let Some(error) = failure {
            return CycleOutcome::Failed {
                error,
                reported: delivered == Some(true),
            };
        }
        match delivered {
            None => {
                bot_debug!("Status unchanged, nothing to send");
                CycleOutcome::StatusUnchanged
            }
            Some(true) => CycleOutcome::StatusSent,
            Some(false) => CycleOutcome::StatusNotDelivered,
        }
    }

    async fn poll(&self, cursor: Cursor) -> Result<Option<StatusUpdate>, CycleError> {
        let payload = self.source.fetch(cursor).await?;
        let page = validate_response(&payload, self.policy)?;
        let Some(latest) = page.latest() else {
            return Ok(None);
        };
        if page.homeworks.len() > 1 {
            bot_debug!(
                "{} homeworks changed, reporting the most recent",
                page.homeworks.len()
            );
        }

        let message = format_status(latest)?;
        Ok(Some(StatusUpdate {
            message,
            current_date: page.current_date,
        }))
    }

    /// Sends one notification; delivery failures are logged and swallowed.
    async fn deliver(&mut self, notification: Notification) -> bool {
        let msg = match self.notifier.notify(notification.text()).await {
            Ok(()) => {
                bot_debug!("Notification delivered: {}", notification.text());
                Msg::NotificationDelivered(notification)
            }
            Err(err) => {
                bot_error!("Failed to send notification: {}", err);
                Msg::NotificationFailed(notification)
            }
        };
        let delivered = matches!(msg, Msg::NotificationDelivered(_));

        let follow_up = self.dispatch(msg);
        if !follow_up.is_empty() {
            bot_warn!("Ignoring {} effects raised by delivery result", follow_up.len());
        }
        delivered
    }

    fn dispatch(&mut self, msg: Msg) -> Vec<Effect> {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        effects
    }
}

fn log_failure(err: &CycleError) {
    match err {
        CycleError::Endpoint(err) => bot_error!("Homework API unavailable: {}", err),
        CycleError::Homework(HomeworkError::Shape(err)) => {
            bot_error!("Homework API answer has unexpected shape: {}", err)
        }
        CycleError::Homework(HomeworkError::Parse(err)) => {
            bot_error!("Homework API answer could not be parsed: {}", err)
        }
    }
}
