//! Append-only transcript storage.

use crate::Message;

/// Ordered, append-only sequence of messages.
///
/// Insertion order is the transcript order. Entries are never removed or
/// replaced.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the end of the log, returning the new length.
    pub fn append(&mut self, message: Message) -> usize {
        self.messages.push(message);
        self.messages.len()
    }

    /// The full transcript in insertion order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Timestamp for the next message: wall-clock milliseconds, clamped so
    /// it never goes below the newest entry.
    pub fn stamp(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match self.messages.last() {
            Some(last) => now.max(last.timestamp()),
            None => now,
        }
    }
}
