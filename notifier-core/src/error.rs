//! Error types for notification dispatch
//!
//! `NotifyError` is fatal and stops the invocation before any channel runs.
//! `ChannelError` is captured per channel and never escapes the dispatcher.

use std::time::Duration;
use thiserror::Error;

/// Fatal errors reported to the caller
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Recoverable failure of a single delivery channel
#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Provider rejected notification: {0}")]
    Provider(String),

    #[error("Invalid push server URL: {0}")]
    InvalidUrl(String),

    #[error("{tool} not found{}", format_hint(.hint))]
    ToolMissing {
        tool: String,
        hint: Option<String>,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Sound not found: {0}")]
    SoundNotFound(String),

    #[error("Timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_hint(hint: &Option<String>) -> String {
    hint.as_deref()
        .map(|h| format!(" ({})", h))
        .unwrap_or_default()
}
