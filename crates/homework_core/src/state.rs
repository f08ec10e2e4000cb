/// Unix timestamp used as `from_date` for the next fetch.
pub type Cursor = i64;

/// Everything the poll loop remembers between cycles.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PollState {
    cursor: Cursor,
    last_message: Option<String>,
    last_error: Option<String>,
}

impl PollState {
    pub fn new(cursor: Cursor) -> Self {
        Self {
            cursor,
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Last status text that reached the user.
    pub fn last_message(&self) -> Option<&str> {
        self.last_message.as_deref()
    }

    /// Last error text that reached the user.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub(crate) fn is_new_message(&self, text: &str) -> bool {
        self.last_message.as_deref() != Some(text)
    }

    pub(crate) fn is_new_error(&self, text: &str) -> bool {
        self.last_error.as_deref() != Some(text)
    }

    pub(crate) fn record_message(&mut self, text: String, advance_to: Cursor) {
        self.last_message = Some(text);
        self.cursor = self.cursor.max(advance_to);
    }

    pub(crate) fn record_error(&mut self, text: String) {
        self.last_error = Some(text);
    }
}
