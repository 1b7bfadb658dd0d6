//! Tracing setup.
//!
//! The interactive TUI owns the terminal, so it logs to a file. Headless
//! commands log to stderr.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Keeps the background log writer alive. Drop it last.
#[must_use]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `level`; `debug` forces the debug level when
/// `RUST_LOG` is unset.
pub fn init(level: &str, debug: bool, target: &LogTarget) -> Result<LogGuard> {
    let fallback = if debug { "debug" } else { level };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    match target {
        LogTarget::Stderr => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(debug)
                .compact()
                .try_init()
                .map_err(|err| anyhow!(err))?;
            Ok(LogGuard { _worker: None })
        }
        LogTarget::File(path) => {
            let (dir, file_name) = split_log_path(path)?;
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (writer, worker) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(debug)
                .try_init()
                .map_err(|err| anyhow!(err))?;
            Ok(LogGuard {
                _worker: Some(worker),
            })
        }
    }
}

fn split_log_path(path: &Path) -> Result<(PathBuf, &std::ffi::OsStr)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_log_path_with_directory() {
        let (dir, name) = split_log_path(Path::new("/tmp/logs/palaver.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "palaver.log");
    }

    #[test]
    fn test_split_log_path_bare_file_uses_cwd() {
        let (dir, name) = split_log_path(Path::new("palaver.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "palaver.log");
    }

    #[test]
    fn test_split_log_path_rejects_directory_only() {
        assert!(split_log_path(Path::new("/")).is_err());
    }
}
