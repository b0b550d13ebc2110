use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_PREFIX: &str = "readable.log";
const LOG_RETENTION: Duration = Duration::from_secs(7 * 86_400);

/// How the binary wants logs emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogOptions {
    /// Number of `-v` flags. Raises the default level from `warn`.
    pub verbosity: u8,
    /// Also write a daily-rotated file under [`log_dir`].
    pub to_file: bool,
}

impl LogOptions {
    /// Filter directive used when neither env var is set.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Return the log directory path.
///
/// Precedence: `READABLE_LOG_DIR` env var > platform data dir.
/// Linux: `$XDG_DATA_HOME/readable/logs/` or `~/.local/share/readable/logs/`
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("READABLE_LOG_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(data) = dirs::data_dir() {
        return data.join("readable").join("logs");
    }

    PathBuf::from("logs")
}

/// Delete rotated `readable.log*` files last modified before `retention`
/// ago. Returns how many were removed.
fn cleanup_old_logs(log_path: &Path, retention: Duration) -> usize {
    let Some(cutoff) = SystemTime::now().checked_sub(retention) else {
        return 0;
    };
    let Ok(entries) = fs::read_dir(log_path) else {
        return 0;
    };

    entries
        .flatten()
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX))
        .filter(|entry| {
            matches!(entry.metadata(), Ok(meta)
                if meta.is_file() && meta.modified().is_ok_and(|at| at < cutoff))
        })
        .filter(|entry| fs::remove_file(entry.path()).is_ok())
        .count()
}

fn env_filter(options: LogOptions) -> EnvFilter {
    EnvFilter::try_from_env("READABLE_LOG")
        .or_else(|_| EnvFilter::try_from_env("RUST_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(options.default_directive()))
}

/// Initialize the logging subsystem.
///
/// Filter controlled by `READABLE_LOG` or `RUST_LOG` (default from
/// [`LogOptions::verbosity`]). Events go to stderr so stdout stays clean for
/// formatted output. With [`LogOptions::to_file`], a daily-rotated file in
/// `log_dir()` is written too, with 7-day retention.
pub fn init(options: LogOptions) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let log_path = options.to_file.then(log_dir);
    let file_layer = match &log_path {
        Some(log_path) => {
            fs::create_dir_all(log_path).with_context(|| {
                format!("failed to create log directory {}", log_path.display())
            })?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix(LOG_FILE_PREFIX)
                .build(log_path)
                .with_context(|| format!("failed to open log file in {}", log_path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter(options))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    if let Some(log_path) = log_path {
        let removed = cleanup_old_logs(&log_path, LOG_RETENTION);
        tracing::debug!(dir = %log_path.display(), removed, "pruned old log files");
    }
    Ok(())
}
