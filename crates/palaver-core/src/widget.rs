//! The chat widget state aggregate.
//!
//! `ChatWidget` owns the thread list, the conversation store, and the
//! transient view state (selection, composer text, title editing, loading,
//! confirmation gates). Every user action is a synchronous method here.
//! The one asynchronous path, the bot reply, leaves as a [`ReplyRequest`]
//! and comes back through [`ChatWidget::resolve_reply`].
//!
//! ## Selection
//!
//! The selected thread is a snapshot, not an index into the list. Renames
//! and title seeding update both; reply descriptions only touch the list.
//! Clearing the selected thread falls back to the built-in default thread,
//! whether or not that thread is still listed.

use chrono::Utc;

use crate::avatar::{AvatarCatalog, RandomSource};
use crate::confirm::{ConfirmFlags, ConfirmKind};
use crate::ids::IdSeq;
use crate::message::{Message, MessageId};
use crate::reply::{ReplyOutcome, ReplyRequest};
use crate::store::ConversationStore;
use crate::text::{derive_description, derive_title};
use crate::thread::{DEFAULT_THREAD_ID, Thread, ThreadId};

pub struct ChatWidget {
    threads: Vec<Thread>,
    selected: Option<Thread>,
    store: ConversationStore,
    default_thread: Thread,
    input: String,
    title_input: String,
    editing_title: bool,
    loading: bool,
    confirm: ConfirmFlags,
    catalog: AvatarCatalog,
    rng: Box<dyn RandomSource>,
    ids: IdSeq,
}

impl ChatWidget {
    /// Creates a widget holding only the built-in default thread, selected.
    pub fn new(catalog: AvatarCatalog, mut rng: Box<dyn RandomSource>) -> Self {
        let avatar = catalog.pick_url(rng.as_mut());
        let default_thread = Thread::new(DEFAULT_THREAD_ID, avatar, Utc::now());

        Self {
            threads: vec![default_thread.clone()],
            selected: Some(default_thread.clone()),
            store: ConversationStore::new(),
            default_thread,
            input: String::new(),
            title_input: String::new(),
            editing_title: false,
            loading: false,
            confirm: ConfirmFlags::default(),
            catalog,
            rng,
            ids: IdSeq::starting_after(DEFAULT_THREAD_ID.0),
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Threads, newest first.
    pub fn threads(&self) -> &[Thread] {
        &self.threads
    }

    pub fn selected(&self) -> Option<&Thread> {
        self.selected.as_ref()
    }

    pub fn default_thread(&self) -> &Thread {
        &self.default_thread
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    /// Messages of the selected thread, empty if it has none.
    pub fn messages(&self) -> &[Message] {
        self.selected
            .as_ref()
            .map(|thread| self.store.messages(thread.id))
            .unwrap_or_default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn title_input(&self) -> &str {
        &self.title_input
    }

    pub fn is_editing_title(&self) -> bool {
        self.editing_title
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn confirm(&self) -> ConfirmFlags {
        self.confirm
    }

    pub fn catalog(&self) -> &AvatarCatalog {
        &self.catalog
    }

    // ========================================================================
    // Text buffers
    // ========================================================================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn set_title_input(&mut self, text: impl Into<String>) {
        self.title_input = text.into();
    }

    // ========================================================================
    // Thread management
    // ========================================================================

    /// Adds a fresh thread at the front, selects it, and starts editing its title.
    pub fn create_thread(&mut self) -> ThreadId {
        let id = ThreadId(self.ids.next_id());
        let avatar = self.catalog.pick_url(self.rng.as_mut());
        let thread = Thread::new(id, avatar, Utc::now());

        self.threads.insert(0, thread.clone());
        self.selected = Some(thread);
        self.title_input.clear();
        self.editing_title = true;

        tracing::debug!(%id, "thread created");
        id
    }

    /// Enters title editing with the selected thread's title in the buffer.
    pub fn begin_title_edit(&mut self) {
        if let Some(thread) = &self.selected {
            self.title_input.clone_from(&thread.title);
            self.editing_title = true;
        }
    }

    /// Renames the selected thread.
    ///
    /// Blank titles are ignored and leave title editing pending.
    /// Returns whether the rename happened.
    pub fn rename_thread(&mut self, new_title: &str) -> bool {
        if new_title.trim().is_empty() {
            return false;
        }
        let Some(id) = self.selected.as_ref().map(|thread| thread.id) else {
            return false;
        };

        self.set_title(id, new_title);
        self.editing_title = false;
        tracing::debug!(%id, "thread renamed");
        true
    }

    /// Renames the selected thread from the title buffer.
    pub fn commit_title_edit(&mut self) -> bool {
        let title = self.title_input.clone();
        self.rename_thread(&title)
    }

    /// Selects a listed thread. Title editing state is left as is.
    pub fn select_thread(&mut self, id: ThreadId) -> bool {
        match self.threads.iter().find(|thread| thread.id == id) {
            Some(thread) => {
                self.selected = Some(thread.clone());
                true
            }
            None => false,
        }
    }

    /// Drops a thread and its messages.
    ///
    /// If it was selected, selection falls back to the built-in default
    /// thread (not to whatever is now first in the list).
    pub fn clear_thread(&mut self, id: ThreadId) {
        self.store.remove(id);
        self.threads.retain(|thread| thread.id != id);

        if self.selected.as_ref().is_some_and(|thread| thread.id == id) {
            self.selected = Some(self.default_thread.clone());
        }
        if self.threads.is_empty() {
            self.threads.push(self.default_thread.clone());
        }

        tracing::debug!(%id, remaining = self.threads.len(), "thread cleared");
    }

    /// Drops every conversation and resets to the default thread alone.
    pub fn clear_all_threads(&mut self) {
        self.store.clear();
        self.threads = vec![self.default_thread.clone()];
        self.selected = Some(self.default_thread.clone());
        tracing::debug!("all threads cleared");
    }

    // ========================================================================
    // Messaging
    // ========================================================================

    /// Records a user message in the selected thread and returns the reply to run.
    ///
    /// Blank text, or no selection, is a no-op. The first message of a thread
    /// still carrying the placeholder title also becomes its title.
    pub fn send_message(&mut self, text: &str) -> Option<ReplyRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let selected = self.selected.as_ref()?;
        let thread_id = selected.id;

        if selected.has_placeholder_title() && !self.store.contains(thread_id) {
            let title = derive_title(text);
            self.set_title(thread_id, &title);
        }

        let message = Message::user(MessageId(self.ids.next_id()), text);
        self.store.append(thread_id, message);
        self.input.clear();
        self.loading = true;

        tracing::debug!(%thread_id, "user message sent");
        Some(ReplyRequest {
            thread_id,
            user_text: text.to_string(),
        })
    }

    /// Sends the composer text. Ignored while a reply is loading.
    pub fn submit_input(&mut self) -> Option<ReplyRequest> {
        if self.loading {
            return None;
        }
        let text = self.input.clone();
        self.send_message(&text)
    }

    /// Applies a finished reply to the thread it was requested for.
    ///
    /// The thread may no longer exist; the message is stored under its id
    /// regardless. Loading is cleared whether or not the reply succeeded.
    pub fn resolve_reply(&mut self, outcome: ReplyOutcome) {
        let ReplyOutcome { thread_id, result } = outcome;

        match result {
            Ok(text) => {
                let description = derive_description(&text);
                let message = Message::bot(MessageId(self.ids.next_id()), text);
                self.store.append(thread_id, message);
                if let Some(thread) = self.threads.iter_mut().find(|t| t.id == thread_id) {
                    thread.description = description;
                }
                tracing::debug!(%thread_id, "bot reply stored");
            }
            Err(err) => {
                tracing::warn!(%thread_id, "Failed to generate reply: {err:#}");
            }
        }

        self.loading = false;
    }

    // ========================================================================
    // Confirmation gates
    // ========================================================================

    pub fn request_confirm(&mut self, kind: ConfirmKind) {
        self.confirm.show(kind);
    }

    pub fn cancel_confirm(&mut self, kind: ConfirmKind) {
        self.confirm.hide(kind);
    }

    /// Runs the gated operation and hides the gate.
    ///
    /// Does nothing unless the gate is visible. Returns whether it ran.
    pub fn accept_confirm(&mut self, kind: ConfirmKind) -> bool {
        if !self.confirm.is_visible(kind) {
            return false;
        }

        match kind {
            ConfirmKind::ClearCurrent => {
                if let Some(id) = self.selected.as_ref().map(|thread| thread.id) {
                    self.clear_thread(id);
                }
            }
            ConfirmKind::ClearAll => self.clear_all_threads(),
        }
        self.confirm.hide(kind);
        true
    }

    fn set_title(&mut self, id: ThreadId, title: &str) {
        if let Some(thread) = self.threads.iter_mut().find(|t| t.id == id) {
            thread.title = title.to_string();
        }
        if let Some(thread) = self.selected.as_mut().filter(|t| t.id == id) {
            thread.title = title.to_string();
        }
    }
}
