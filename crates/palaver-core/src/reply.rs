//! Bot reply generation.
//!
//! The widget never talks to a generator directly. `send_message` hands back a
//! [`ReplyRequest`]; whoever owns the event loop runs it with [`run_reply`] and
//! feeds the resulting [`ReplyOutcome`] into `ChatWidget::resolve_reply`.
//! Requests are never cancelled: an outcome always comes back, even for a
//! thread that was cleared in the meantime.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use futures_util::future::BoxFuture;
use minijinja::{Environment, UndefinedBehavior, context};

use crate::config::ReplyConfig;
use crate::thread::ThreadId;

/// A generated reply and how long to hold it back before delivering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub delay: Duration,
}

/// Produces bot replies for user messages.
pub trait ReplyGenerator: Send + Sync {
    fn generate(&self, user_text: &str) -> BoxFuture<'static, Result<Reply>>;
}

/// A reply that still has to be produced, bound to the thread it was sent from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyRequest {
    pub thread_id: ThreadId,
    pub user_text: String,
}

/// Result of running a [`ReplyRequest`].
#[derive(Debug)]
pub struct ReplyOutcome {
    pub thread_id: ThreadId,
    pub result: Result<String>,
}

/// Generates the reply, waits out its delay, and packages the result.
///
/// Generator errors end up in [`ReplyOutcome::result`] rather than being
/// propagated, so the consumer always gets a chance to clear its loading state.
pub async fn run_reply(generator: Arc<dyn ReplyGenerator>, request: ReplyRequest) -> ReplyOutcome {
    let ReplyRequest {
        thread_id,
        user_text,
    } = request;

    let result = match generator.generate(&user_text).await {
        Ok(reply) => {
            tracing::debug!(%thread_id, delay_ms = reply.delay.as_millis() as u64, "reply ready");
            tokio::time::sleep(reply.delay).await;
            Ok(reply.text)
        }
        Err(err) => Err(err),
    };

    ReplyOutcome { thread_id, result }
}

/// Canned replies rendered from a template after a fixed delay.
#[derive(Debug, Clone)]
pub struct SimulatedReplyGenerator {
    template: String,
    delay: Duration,
}

impl SimulatedReplyGenerator {
    pub const DEFAULT_TEMPLATE: &str = "This is a simulated reply to: \"{{ message }}\". \
         In a real implementation, this would be connected to your AI API.";
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Creates a generator, rejecting templates that fail to parse.
    pub fn new(template: impl Into<String>, delay: Duration) -> Result<Self> {
        let template = template.into();
        {
            let env = environment();
            env.template_from_str(&template)
                .context("Invalid reply template")?;
        }
        Ok(Self { template, delay })
    }

    pub fn from_config(config: &ReplyConfig) -> Result<Self> {
        Self::new(config.template.clone(), config.delay())
    }

    fn render(&self, message: &str) -> Result<String> {
        environment()
            .render_str(&self.template, context! { message => message })
            .context("Failed to render reply template")
    }
}

impl Default for SimulatedReplyGenerator {
    fn default() -> Self {
        Self {
            template: Self::DEFAULT_TEMPLATE.to_string(),
            delay: Self::DEFAULT_DELAY,
        }
    }
}

impl ReplyGenerator for SimulatedReplyGenerator {
    fn generate(&self, user_text: &str) -> BoxFuture<'static, Result<Reply>> {
        let rendered = self.render(user_text);
        let delay = self.delay;
        Box::pin(async move {
            Ok(Reply {
                text: rendered?,
                delay,
            })
        })
    }
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env
}
