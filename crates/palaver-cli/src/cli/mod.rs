//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use palaver_core::config::{self, Config};
use palaver_core::logging::{self, LogTarget};

mod commands;

#[derive(Parser)]
#[command(name = "palaver")]
#[command(version)]
#[command(about = "Terminal chat interface with simulated replies")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sends one message and prints the conversation
    Exec {
        /// The message to send
        #[arg(short, long)]
        prompt: String,

        /// Title for the conversation (derived from the message otherwise)
        #[arg(short, long)]
        title: Option<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Config commands must work even when the config file is broken
    if let Some(Commands::Config { command }) = &cli.command {
        return match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(),
        };
    }

    let config = Config::load().context("load config")?;

    // The TUI owns the terminal, so interactive sessions log to a file
    let target = if cli.command.is_none() {
        LogTarget::File(config.log.file_or_default())
    } else {
        LogTarget::Stderr
    };
    let _log_guard = logging::init(&config.log.level, cli.debug, &target)?;
    tracing::debug!(config = %config::paths::config_path().display(), "config loaded");

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli.command, &config).await })
}

async fn dispatch(command: Option<Commands>, config: &Config) -> Result<()> {
    // default to chat mode
    let Some(command) = command else {
        return commands::chat::run(config);
    };

    match command {
        Commands::Exec { prompt, title } => {
            commands::exec::run(config, &prompt, title.as_deref()).await
        }
        Commands::Config { .. } => Ok(()),
    }
}
