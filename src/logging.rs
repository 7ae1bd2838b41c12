//! Tracing setup. The full-screen view owns the terminal, so it only logs
//! when a log file is configured; setup warnings are handed back to the
//! caller to print once the terminal is restored.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{Interface, LogConfig};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Disabled,
}

impl LogTarget {
    pub fn select(log: &LogConfig, interface: Interface) -> LogTarget {
        match (&log.file, interface) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Interface::Console) => LogTarget::Stderr,
            (None, Interface::Tui) => LogTarget::Disabled,
        }
    }
}

/// `RUST_LOG` wins over the configured directives; a broken directive
/// string falls back to `warn`.
pub fn env_filter(log: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Resolved destination, with the log file already opened.
#[derive(Debug)]
pub enum LogSink {
    File(PathBuf, File),
    Stderr,
    Disabled,
}

/// Open the configured target. A log file that cannot be opened falls back
/// to what the interface allows, and the failure is returned as a warning.
pub fn open_sink(log: &LogConfig, interface: Interface) -> (LogSink, Vec<String>) {
    let mut warnings = Vec::new();

    let target = match LogTarget::select(log, interface) {
        LogTarget::File(path) => match open_log_file(&path) {
            Ok(file) => return (LogSink::File(path, file), warnings),
            Err(err) => {
                warnings.push(format!("Failed to open log file {}: {err}", path.display()));
                let fallback = LogConfig {
                    file: None,
                    ..log.clone()
                };
                LogTarget::select(&fallback, interface)
            }
        },
        target => target,
    };

    let sink = match target {
        LogTarget::Stderr => LogSink::Stderr,
        _ => LogSink::Disabled,
    };
    (sink, warnings)
}

/// Install the global subscriber. Must be called at most once.
///
/// Returns the setup warnings so the caller can show them where the user
/// will see them; they are also logged when a sink is active.
pub fn init_tracing(log: &LogConfig, interface: Interface) -> Vec<String> {
    let filter = env_filter(log);
    let (sink, warnings) = open_sink(log, interface);

    match sink {
        LogSink::File(path, file) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(filter)
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        LogSink::Stderr => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
        LogSink::Disabled => {
            tracing_subscriber::registry().with(filter).init();
        }
    }

    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    warnings
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_logs_to_stderr_by_default() {
        let log = LogConfig::default();
        assert_eq!(LogTarget::select(&log, Interface::Console), LogTarget::Stderr);
    }

    #[test]
    fn test_tui_without_file_disables_output() {
        let log = LogConfig::default();
        assert_eq!(LogTarget::select(&log, Interface::Tui), LogTarget::Disabled);
    }

    #[test]
    fn test_configured_file_wins() {
        let log = LogConfig {
            file: Some(PathBuf::from("logs/game.log")),
            ..LogConfig::default()
        };
        for interface in [Interface::Console, Interface::Tui] {
            assert_eq!(
                LogTarget::select(&log, interface),
                LogTarget::File(PathBuf::from("logs/game.log"))
            );
        }
    }

    #[test]
    fn test_unopenable_file_under_tui_reports_warning() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let log = LogConfig {
            file: Some(blocker.join("game.log")),
            ..LogConfig::default()
        };

        let (sink, warnings) = open_sink(&log, Interface::Tui);
        assert!(matches!(sink, LogSink::Disabled));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("Failed to open log file"));

        let (sink, warnings) = open_sink(&log, Interface::Console);
        assert!(matches!(sink, LogSink::Stderr));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_openable_file_has_no_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let log = LogConfig {
            file: Some(dir.path().join("game.log")),
            ..LogConfig::default()
        };
        let (sink, warnings) = open_sink(&log, Interface::Tui);
        assert!(matches!(sink, LogSink::File(..)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("game.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
