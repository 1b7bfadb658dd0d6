//! Header and composer slice: title editing and message entry.

mod render;
mod update;

pub use render::{COMPOSER_PLACEHOLDER, render_composer, render_header};
pub use update::{handle_composer_key, handle_title_key, insert_text};
