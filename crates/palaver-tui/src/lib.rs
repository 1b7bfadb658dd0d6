//! Full-screen TUI for palaver.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};
use std::sync::Arc;

use anyhow::Result;
pub use features::{input, thread, transcript};
use palaver_core::config::Config;
use palaver_core::{
    AvatarCatalog, ChatWidget, ReplyGenerator, SimulatedReplyGenerator, ThreadRngSource,
};
pub use runtime::TuiRuntime;

use crate::state::AppState;

/// Runs the interactive chat loop.
pub fn run_interactive_chat(config: &Config) -> Result<()> {
    // Chat mode requires a terminal to render the TUI
    if !stdout().is_terminal() {
        anyhow::bail!(
            "Chat mode requires a terminal.\n\
             Use `palaver exec --prompt '...'` for non-interactive execution."
        );
    }

    let generator: Arc<dyn ReplyGenerator> =
        Arc::new(SimulatedReplyGenerator::from_config(&config.reply)?);
    let widget = ChatWidget::new(
        AvatarCatalog::new(config.avatars.clone()),
        Box::new(ThreadRngSource),
    );
    let state = AppState::new(widget, config.shell.clone());

    tracing::info!(title = %config.shell.title, "starting interactive chat");
    let mut runtime = TuiRuntime::new(state, generator)?;
    runtime.run()?;
    tracing::info!("interactive chat closed");

    Ok(())
}
