use std::sync::Once;

use homework_core::{update, Effect, Msg, Notification, PollState};
use pretty_assertions::assert_eq;

const START: i64 = 1_700_000_000;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(bot_logging::initialize_for_tests);
}

fn status(message: &str, advance_to: i64) -> Msg {
    Msg::StatusChanged {
        message: message.to_string(),
        advance_to,
    }
}

fn failure(error: &str) -> Msg {
    Msg::CycleFailed {
        error: error.to_string(),
    }
}

/// Runs one message through `update` and confirms delivery of every notify effect.
fn deliver(state: PollState, msg: Msg) -> (PollState, Vec<Notification>) {
    let (mut state, effects) = update(state, msg);
    let mut sent = Vec::new();
    for Effect::Notify(notification) in effects {
        let (next, follow_up) = update(state, Msg::NotificationDelivered(notification.clone()));
        assert!(follow_up.is_empty());
        state = next;
        sent.push(notification);
    }
    (state, sent)
}

#[test]
fn new_status_emits_notify_effect() {
    init_logging();
    let (state, effects) = update(PollState::new(START), status("hw1 approved", START + 60));

    assert_eq!(
        effects,
        vec![Effect::Notify(Notification::Status {
            text: "hw1 approved".to_string(),
            advance_to: START + 60,
        })]
    );
    // Nothing is recorded until delivery is confirmed.
    assert_eq!(state.cursor(), START);
    assert_eq!(state.last_message(), None);
}

#[test]
fn identical_status_on_consecutive_cycles_is_sent_once() {
    init_logging();
    let (state, first) = deliver(PollState::new(START), status("hw1 approved", START + 60));
    let (state, second) = deliver(state, status("hw1 approved", START + 120));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(state.last_message(), Some("hw1 approved"));
    assert_eq!(state.cursor(), START + 60);
}

#[test]
fn changed_status_is_sent_again() {
    init_logging();
    let (state, _) = deliver(PollState::new(START), status("hw1 reviewing", START + 60));
    let (state, sent) = deliver(state, status("hw1 approved", START + 120));

    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].text(), "hw1 approved");
    assert_eq!(state.cursor(), START + 120);
}

#[test]
fn cursor_never_regresses() {
    init_logging();
    let (state, sent) = deliver(PollState::new(START), status("hw1 approved", START - 3_600));

    assert_eq!(sent.len(), 1);
    assert_eq!(state.cursor(), START);
}

#[test]
fn failed_cycle_leaves_cursor_unchanged() {
    init_logging();
    let (state, sent) = deliver(PollState::new(START), failure("endpoint error: bad status 500"));

    assert_eq!(sent.len(), 1);
    assert_eq!(state.cursor(), START);
    assert_eq!(state.last_error(), Some("endpoint error: bad status 500"));
    assert_eq!(state.last_message(), None);
}

#[test]
fn repeated_error_is_reported_once() {
    init_logging();
    let (state, first) = deliver(PollState::new(START), failure("endpoint error: bad status 500"));
    let (state, second) = deliver(state, failure("endpoint error: bad status 500"));
    let (_state, third) = deliver(state, failure("endpoint error: bad status 502"));

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
    assert_eq!(
        third,
        vec![Notification::Error {
            text: "endpoint error: bad status 502".to_string()
        }]
    );
}

#[test]
fn error_cache_survives_a_successful_cycle() {
    init_logging();
    let (state, _) = deliver(PollState::new(START), failure("endpoint error: bad status 500"));
    let (state, _) = deliver(state, status("hw1 approved", START + 60));
    let (_state, sent) = deliver(state, failure("endpoint error: bad status 500"));

    assert!(sent.is_empty());
}

#[test]
fn undelivered_status_is_offered_again() {
    init_logging();
    let (state, effects) = update(PollState::new(START), status("hw1 approved", START + 60));
    let Some(Effect::Notify(notification)) = effects.into_iter().next() else {
        panic!("expected a notify effect");
    };

    let (state, effects) = update(state, Msg::NotificationFailed(notification));
    assert!(effects.is_empty());
    assert_eq!(state.cursor(), START);
    assert_eq!(state.last_message(), None);

    let (_state, effects) = update(state, status("hw1 approved", START + 60));
    assert_eq!(effects.len(), 1);
}

#[test]
fn status_and_error_caches_are_independent() {
    init_logging();
    let (state, _) = deliver(PollState::new(START), status("same text", START + 1));
    let (state, sent) = deliver(state, failure("same text"));

    assert_eq!(sent.len(), 1);
    assert_eq!(state.last_message(), Some("same text"));
    assert_eq!(state.last_error(), Some("same text"));
}
