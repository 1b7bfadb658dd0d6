//! Conversation summaries shown in the thread list.

use std::fmt;

use chrono::{DateTime, Utc};

/// Title every thread starts with until renamed or seeded by its first message.
pub const PLACEHOLDER_TITLE: &str = "New Conversation";

/// Description every thread starts with until the first bot reply lands.
pub const PLACEHOLDER_DESCRIPTION: &str = "Start a new conversation";

/// Id of the built-in default thread.
pub const DEFAULT_THREAD_ID: ThreadId = ThreadId(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreadId(pub u64);

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presence shown next to a thread. Only `Online` exists today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThreadStatus {
    #[default]
    Online,
}

impl ThreadStatus {
    pub fn label(self) -> &'static str {
        match self {
            ThreadStatus::Online => "online",
        }
    }
}

/// A conversation summary.
///
/// `avatar` is fixed at creation. `timestamp` is informational only; list
/// order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub status: ThreadStatus,
    pub description: String,
    pub avatar: String,
    pub timestamp: DateTime<Utc>,
}

impl Thread {
    /// Creates a thread with placeholder title and description.
    pub fn new(id: ThreadId, avatar: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            status: ThreadStatus::Online,
            description: PLACEHOLDER_DESCRIPTION.to_string(),
            avatar: avatar.into(),
            timestamp,
        }
    }

    pub fn has_placeholder_title(&self) -> bool {
        self.title == PLACEHOLDER_TITLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_thread_uses_placeholders() {
        let thread = Thread::new(ThreadId(42), "https://example.com/a.png", Utc::now());
        assert_eq!(thread.title, PLACEHOLDER_TITLE);
        assert_eq!(thread.description, PLACEHOLDER_DESCRIPTION);
        assert_eq!(thread.status, ThreadStatus::Online);
        assert!(thread.has_placeholder_title());
    }

    #[test]
    fn test_renamed_thread_is_not_placeholder() {
        let mut thread = Thread::new(ThreadId(42), "", Utc::now());
        thread.title = "Rust questions".to_string();
        assert!(!thread.has_placeholder_title());
    }
}
