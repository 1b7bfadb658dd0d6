//! Message pane slice.

mod render;

pub use render::{SPINNER_FRAMES, build_transcript_lines, render_transcript};
