//! File logging for the terminal client.
//!
//! The TUI owns stdout and stderr, so every log line goes to a per-session
//! file under the platform cache directory.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "client.log";

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/slide/logs`
/// - Linux: `~/.cache/slide/logs` (or `$XDG_CACHE_HOME/slide/logs`)
/// - Windows: `%LOCALAPPDATA%\slide\cache\logs`
/// - Fallback: `<temp>/slide/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "slide")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("slide"))
        .join("logs")
}

/// Resolves the session id used to name the log directory.
pub fn session_id(configured: Option<&str>) -> String {
    match configured {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{timestamp}")
        }
    }
}

/// Installs the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// The returned guard flushes the background writer on drop; keep it alive
/// for the lifetime of the process.
pub fn setup_logging(session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_dir().join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Keep ANSI codes so `tail -f` shows colours.
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/{}", session_log_dir.display(), LOG_FILE);

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_session_id_is_trimmed() {
        assert_eq!(session_id(Some("  nightly ")), "nightly");
    }

    #[test]
    fn missing_session_id_is_generated() {
        assert!(session_id(None).starts_with("session_"));
        assert!(session_id(Some("   ")).starts_with("session_"));
    }

    #[test]
    fn log_dir_ends_with_logs() {
        assert!(log_dir().ends_with("logs"));
    }
}
