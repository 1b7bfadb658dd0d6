//! Feature slices for the TUI (update/render per region).

pub mod input;
pub mod thread;
pub mod transcript;
