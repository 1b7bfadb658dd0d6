//! Configuration management for palaver.
//!
//! Loads configuration from ${PALAVER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::avatar::{Avatar, default_avatars};
use crate::reply::SimulatedReplyGenerator;

pub mod paths {
    use std::path::PathBuf;

    /// Returns the palaver home directory.
    ///
    /// Checks PALAVER_HOME env var first, falls back to ~/.config/palaver
    pub fn palaver_home() -> PathBuf {
        if let Ok(home) = std::env::var("PALAVER_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".palaver"),
            |h| h.join(".config").join("palaver"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        palaver_home().join("config.toml")
    }

    /// Returns the default log file for interactive sessions.
    pub fn default_log_file() -> PathBuf {
        palaver_home().join("logs").join("palaver.log")
    }
}

/// Page shell settings: what the surrounding window shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub title: String,
    pub description: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: "Chat Interface".to_string(),
            description: "A modern chat interface".to_string(),
        }
    }
}

/// Simulated reply settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyConfig {
    pub delay_ms: u64,
    pub template: String,
}

impl ReplyConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            delay_ms: SimulatedReplyGenerator::DEFAULT_DELAY.as_millis() as u64,
            template: SimulatedReplyGenerator::DEFAULT_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl LogConfig {
    pub fn file_or_default(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(paths::default_log_file)
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub shell: ShellConfig,
    pub reply: ReplyConfig,
    pub log: LogConfig,
    /// Avatars new threads pick from. Empty means the stock set.
    pub avatars: Vec<Avatar>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shell: ShellConfig::default(),
            reply: ReplyConfig::default(),
            log: LogConfig::default(),
            avatars: default_avatars(),
        }
    }
}

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the commented default config to `path`.
    ///
    /// Fails if the file already exists. Creates parent directories.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Serializes the effective configuration.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reply.delay_ms, 1000);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "[reply]\ndelay_ms = 5\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.reply.delay_ms, 5);
        assert_eq!(
            config.reply.template,
            SimulatedReplyGenerator::DEFAULT_TEMPLATE
        );
        assert_eq!(config.shell.title, "Chat Interface");
        assert_eq!(config.avatars.len(), 3);
    }

    #[test]
    fn test_default_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("delay_ms = 1000"));
        assert!(contents.contains("[[avatars]]"));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "# existing").unwrap();

        let err = Config::init(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "reply = 3").unwrap();

        let err = Config::load_from(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_to_toml_includes_every_section() {
        let text = Config::default().to_toml().unwrap();
        assert!(text.contains("[shell]"));
        assert!(text.contains("[reply]"));
        assert!(text.contains("[[avatars]]"));
        assert!(!text.contains("file ="));
    }
}
