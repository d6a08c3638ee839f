//! Handler for the notify command

use super::output;
use anyhow::{Context, Result};
use notifier_core::models::{Configuration, Level, LogLevel, NotificationRequest};
use notifier_core::services::logging::init_logging;
use notifier_core::{Dispatcher, NotifyError};
use std::path::PathBuf;

/// Parsed command-line arguments
pub struct NotifyArgs {
    pub level: String,
    pub message: String,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
    pub log_level: Option<LogLevel>,
}

/// Validate, load configuration, dispatch and print the outcome.
/// Returns the process exit code.
pub async fn handle_notify(args: NotifyArgs) -> Result<u8> {
    // Arguments are checked before anything else runs
    let request = NotificationRequest::parse(&args.level, &args.message)?;

    let config_path = Configuration::resolve_path(args.config);
    let (config, load_error) = match &config_path {
        Some(path) => match Configuration::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Configuration::default(), Some(e)),
        },
        None => (Configuration::default(), None),
    };

    let _ = init_logging(args.log_level.unwrap_or(config.log_level));

    match (&config_path, load_error) {
        (_, Some(e)) => tracing::warn!(error = %e, "failed to load config, using defaults"),
        (Some(path), None) if !path.exists() => {
            tracing::info!(path = %path.display(), "config file not found, using defaults")
        }
        _ => {}
    }
    if let Err(errors) = config.validate() {
        for error in errors {
            tracing::warn!("config: {}", error);
        }
    }

    let report = Dispatcher::from_config(&config).dispatch(&request).await;

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", json);
    } else if !args.quiet {
        for line in output::summary_lines(&report) {
            println!("{}", line);
        }
    }

    Ok(report.exit_code())
}

/// Print a fatal error the way the summary lines look
pub fn report_error(error: &anyhow::Error) {
    eprintln!("[ERROR] {}", error);
    if let Some(NotifyError::InvalidArgument(_)) = error.downcast_ref::<NotifyError>() {
        let levels: Vec<_> = Level::ALL.iter().map(Level::as_str).collect();
        eprintln!("[INFO]  Valid levels: {}", levels.join(", "));
        eprintln!("[INFO]  Usage: notify <level> <message>");
    }
}
