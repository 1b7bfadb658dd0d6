//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent process control and task spawning only; the reducer never
//! spawns anything itself.

use palaver_core::ReplyRequest;

#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Produce the bot reply for a message that was just sent.
    GenerateReply(ReplyRequest),
}
