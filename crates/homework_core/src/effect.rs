use crate::Cursor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Notify(Notification),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Homework status text; the cursor moves to `advance_to` once delivered.
    Status { text: String, advance_to: Cursor },
    /// Error report for a failed cycle.
    Error { text: String },
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Status { text, .. } | Notification::Error { text } => text,
        }
    }
}
