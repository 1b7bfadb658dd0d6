//! Thread list (sidebar) slice.

pub(crate) mod render;
mod update;

pub use render::{SIDEBAR_WIDTH, render_thread_list};
pub use update::handle_list_key;
