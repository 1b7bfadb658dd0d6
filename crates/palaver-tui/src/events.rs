//! UI event types.
//!
//! All inputs to the TUI (terminal input, timer ticks, finished replies) are
//! converted to `UiEvent` before reaching the reducer.
//!
//! ## Inbox Pattern
//!
//! Async work sends its result straight to the runtime's inbox; the runtime
//! drains the inbox every loop iteration and feeds the events to `update`.

use crossterm::event::Event as CrosstermEvent;
use palaver_core::ReplyOutcome;

#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, render cadence).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// A bot reply finished, successfully or not.
    ReplyResolved(ReplyOutcome),
}
