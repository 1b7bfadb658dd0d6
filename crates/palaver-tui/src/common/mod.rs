//! Shared leaf helpers for TUI features.
//!
//! Nothing in here may depend on feature state or `UiEvent`.

pub mod text;

pub use text::{truncate_with_ellipsis, wrap_text};
