//! Chat command handler.

use anyhow::{Context, Result};
use palaver_core::config::Config;

/// Runs the full-screen chat. Blocks the calling task until the user quits;
/// replies run on the surrounding tokio runtime's worker threads.
pub fn run(config: &Config) -> Result<()> {
    tokio::task::block_in_place(|| palaver_tui::run_interactive_chat(config))
        .context("interactive chat failed")
}
