//! Homework core: pure validation, formatting and the poll loop state machine.
mod credentials;
mod effect;
mod error;
mod msg;
mod response;
mod state;
mod status;
mod update;
mod verdict;

pub use credentials::{Credentials, PRACTICUM_TOKEN, TELEGRAM_CHAT_ID, TELEGRAM_TOKEN};
pub use effect::{Effect, Notification};
pub use error::{ConfigError, HomeworkError, ParseError, ShapeError};
pub use msg::Msg;
pub use response::{validate_response, EmptyListPolicy, HomeworkPage};
pub use state::{Cursor, PollState};
pub use status::{format_status, HomeworkRecord};
pub use update::update;
pub use verdict::HomeworkStatus;
