//! Per-thread message history.

use std::collections::HashMap;

use crate::message::Message;
use crate::thread::ThreadId;

/// Maps thread ids to their messages in display order.
///
/// A thread without an entry has no messages. Entries are append-only;
/// the only way to drop messages is to remove the whole entry.
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    entries: HashMap<ThreadId, Vec<Message>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages for `id`, empty when the thread has no entry.
    pub fn messages(&self, id: ThreadId) -> &[Message] {
        self.entries.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, id: ThreadId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Appends to the entry for `id`, creating it if absent.
    pub fn append(&mut self, id: ThreadId, message: Message) {
        self.entries.entry(id).or_default().push(message);
    }

    pub fn remove(&mut self, id: ThreadId) -> Option<Vec<Message>> {
        self.entries.remove(&id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of threads that have an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageId;

    #[test]
    fn test_missing_entry_has_no_messages() {
        let store = ConversationStore::new();
        assert!(store.messages(ThreadId(7)).is_empty());
        assert!(!store.contains(ThreadId(7)));
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = ConversationStore::new();
        store.append(ThreadId(1), Message::user(MessageId(1), "first"));
        store.append(ThreadId(1), Message::bot(MessageId(2), "second"));
        store.append(ThreadId(2), Message::user(MessageId(3), "other"));

        let texts: Vec<&str> = store
            .messages(ThreadId(1))
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_drops_only_that_entry() {
        let mut store = ConversationStore::new();
        store.append(ThreadId(1), Message::user(MessageId(1), "a"));
        store.append(ThreadId(2), Message::user(MessageId(2), "b"));

        assert!(store.remove(ThreadId(1)).is_some());
        assert!(!store.contains(ThreadId(1)));
        assert!(store.contains(ThreadId(2)));
    }
}
