use crate::{Cursor, Notification};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A fetch produced a formatted status message.
    StatusChanged { message: String, advance_to: Cursor },
    /// The API reported no homework in the polled window.
    NoNewWork,
    /// Fetch, validation or formatting failed; carries the rendered error.
    CycleFailed { error: String },
    /// The notifier confirmed delivery.
    NotificationDelivered(Notification),
    /// The notifier gave up on a message.
    NotificationFailed(Notification),
}
