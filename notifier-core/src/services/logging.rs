//! Logging service

use crate::models::LogLevel;
use tracing_subscriber::EnvFilter;

/// Filter directive for the notifier crates at `level`
pub fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "notifier_core=error,notify=error",
        LogLevel::Warn => "notifier_core=warn,notify=warn",
        LogLevel::Info => "notifier_core=info,notify=info",
        LogLevel::Debug => "notifier_core=debug,notify=debug",
        LogLevel::Trace => "notifier_core=trace,notify=trace",
    }
}

/// Initialize logging with the specified level. `RUST_LOG` takes precedence.
///
/// Logs go to stderr so stdout stays free for the summary or JSON report.
pub fn init_logging(level: LogLevel) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
