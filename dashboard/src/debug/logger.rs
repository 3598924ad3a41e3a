//! File-based logging initialization

use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system
///
/// Sets up file-based logging with:
/// - Daily log rotation
/// - Structured output with targets and line numbers
/// - Non-blocking writes
///
/// Logs are written to `logs/dashboard.log` by default; override the
/// directory with `LOG_DIR` and the filter with `RUST_LOG`/`LOG_LEVEL`.
pub fn init() {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "dashboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "dashboard=info,warn".to_string());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| EnvFilter::new("dashboard=info,warn"));

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI codes in log files

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(log_dir = %log_dir, "Logging initialized");

    // Keep the guard alive for the lifetime of the program
    std::mem::forget(guard);
}
