//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, None, None);
}

/// Initialize the logger with optional JSON output and file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this twice is
/// harmless: the second subscriber is rejected and a note goes to stderr.
pub fn init_logger_with_file(log_level: Option<&str>, json: Option<bool>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},booking_server={level},tower_http={level},sqlx=warn"
        ))
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Daily rolling file when the directory is there
    let file_appender = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .map(|p| tracing_appender::rolling::daily(p, "booking-server"));

    let result = match (json.unwrap_or(false), file_appender) {
        (true, Some(writer)) => subscriber.json().with_writer(writer).try_init(),
        (true, None) => subscriber.json().try_init(),
        (false, Some(writer)) => subscriber.with_ansi(false).with_writer(writer).try_init(),
        (false, None) => subscriber.try_init(),
    };

    if let Err(e) = result {
        eprintln!("Logger already initialized: {e}");
    }
}
