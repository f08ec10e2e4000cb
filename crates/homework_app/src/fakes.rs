//! In-memory stand-ins for the HTTP source and notifier.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use homework_core::Cursor;
use homework_engine::{FetchError, HomeworkSource, Notifier, SendMessageError};
use serde_json::{json, Value};

/// Answers fetches from a queue; an empty queue answers "no homeworks".
#[derive(Clone, Default)]
pub struct ScriptedSource {
    replies: Arc<Mutex<VecDeque<Result<Value, FetchError>>>>,
    cursors: Arc<Mutex<Vec<Cursor>>>,
}

impl ScriptedSource {
    pub fn push(&self, reply: Result<Value, FetchError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    /// `from_date` of every fetch made so far.
    pub fn cursors(&self) -> Vec<Cursor> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HomeworkSource for ScriptedSource {
    async fn fetch(&self, from_date: Cursor) -> Result<Value, FetchError> {
        self.cursors.lock().unwrap().push(from_date);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json!({"homeworks": []})))
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl RecordingNotifier {
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, text: &str) -> Result<(), SendMessageError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(SendMessageError::Rejected("chat not found".to_string()));
        }
        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
