use crate::{Effect, Msg, Notification, PollState};

/// Pure update function: applies a message to state and returns any effects.
///
/// Caches and the cursor only move on `NotificationDelivered`, so a message
/// the notifier failed to deliver is offered again on the next cycle.
pub fn update(mut state: PollState, msg: Msg) -> (PollState, Vec<Effect>) {
    let effects = match msg {
        Msg::StatusChanged {
            message,
            advance_to,
        } => {
            if state.is_new_message(&message) {
                vec![Effect::Notify(Notification::Status {
                    text: message,
                    advance_to,
                })]
            } else {
                Vec::new()
            }
        }
        Msg::CycleFailed { error } => {
            if state.is_new_error(&error) {
                vec![Effect::Notify(Notification::Error { text: error })]
            } else {
                Vec::new()
            }
        }
        Msg::NotificationDelivered(notification) => {
            match notification {
                Notification::Status { text, advance_to } => {
                    state.record_message(text, advance_to);
                }
                Notification::Error { text } => state.record_error(text),
            }
            Vec::new()
        }
        Msg::NoNewWork | Msg::NotificationFailed(_) => Vec::new(),
    };

    (state, effects)
}
