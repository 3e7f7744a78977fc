//! Logging to stderr and to a per-session file.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Platform cache directory for logs, e.g. `~/.cache/leveler/logs` on Linux.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "leveler")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/leveler"))
        .join("logs")
}

pub fn session_id_or_timestamp(session_id: Option<&str>) -> String {
    session_id.map_or_else(
        || {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{secs}")
        },
        str::to_string,
    )
}

/// Installs the global subscriber. Logs go to `<log_dir>/<session>/client.log`
/// and to stderr; stdout is left for the run report.
///
/// The returned guard flushes the file writer on drop and must be held for
/// the lifetime of the program.
pub fn setup_logging(log_dir: &Path, session_id: &str) -> Result<WorkerGuard> {
    let session_log_dir = log_dir.join(session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/client.log", session_log_dir.display());

    Ok(guard)
}
