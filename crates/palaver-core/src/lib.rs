//! Domain core for palaver.
//!
//! Owns the chat widget state (threads, conversations, transient UI flags)
//! and the collaborators it talks to (avatar catalog, reply generator).
//! Nothing in here touches the terminal.

pub mod avatar;
pub mod config;
pub mod confirm;
pub mod ids;
pub mod logging;
pub mod message;
pub mod reply;
pub mod store;
pub mod text;
pub mod thread;
pub mod widget;

pub use avatar::{Avatar, AvatarCatalog, RandomSource, ThreadRngSource};
pub use confirm::{ConfirmFlags, ConfirmKind};
pub use message::{Message, MessageId, Sender};
pub use reply::{
    Reply, ReplyGenerator, ReplyOutcome, ReplyRequest, SimulatedReplyGenerator, run_reply,
};
pub use store::ConversationStore;
pub use thread::{Thread, ThreadId, ThreadStatus};
pub use widget::ChatWidget;
