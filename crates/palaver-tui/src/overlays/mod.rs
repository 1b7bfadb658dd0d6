//! Modal overlays.
//!
//! Overlays take over keyboard input while visible. The only modal in the
//! chat is the clear confirmation, driven by the widget's confirmation flags
//! rather than by state of its own.

pub mod confirm;
pub mod render_utils;

pub use confirm::{ConfirmAction, handle_confirm_key, render_confirm};

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}
