//! Logging Infrastructure
//!
//! Structured logging setup with optional daily-rolled file output.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with defaults (info level, stdout only)
pub fn init_logger() {
    init_logger_with_file(None, None);
}

/// Initialize the logger
///
/// `RUST_LOG` takes precedence over `log_level`. When `log_dir` points to an
/// existing directory, output goes to a daily-rolled file instead of stdout.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.unwrap_or("info")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    match log_dir.map(Path::new).filter(|p| p.exists()) {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "trattoria-server");
            builder.with_writer(file_appender).init();
        }
        None => builder.init(),
    }
}
