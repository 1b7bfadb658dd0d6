//! Exec command handler.
//!
//! Drives one send/reply round through the same widget the TUI uses, then
//! prints the conversation.

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use palaver_core::config::Config;
use palaver_core::{
    AvatarCatalog, ChatWidget, ReplyGenerator, SimulatedReplyGenerator, ThreadRngSource,
    run_reply,
};

pub async fn run(config: &Config, prompt: &str, title: Option<&str>) -> Result<()> {
    if prompt.trim().is_empty() {
        bail!("Prompt must not be empty");
    }

    let generator: Arc<dyn ReplyGenerator> = Arc::new(
        SimulatedReplyGenerator::from_config(&config.reply).context("build reply generator")?,
    );
    let mut widget = ChatWidget::new(
        AvatarCatalog::new(config.avatars.clone()),
        Box::new(ThreadRngSource),
    );

    let thread_id = widget.create_thread();
    if let Some(title) = title
        && !widget.rename_thread(title)
    {
        bail!("Title must not be empty");
    }

    let request = widget
        .send_message(prompt)
        .context("message was not sent")?;
    tracing::debug!(%thread_id, "waiting for reply");
    let outcome = run_reply(generator, request).await;
    if let Err(err) = &outcome.result {
        bail!("Reply failed: {err:#}");
    }
    widget.resolve_reply(outcome);

    for message in widget.messages() {
        println!("[{}] {}: {}", message.time, message.sender.label(), message.text);
    }

    let thread = widget
        .threads()
        .iter()
        .find(|thread| thread.id == thread_id)
        .context("conversation disappeared")?;
    println!();
    println!("title: {}", thread.title);
    println!("description: {}", thread.description);

    Ok(())
}
