//! Configuration data structures

use crate::error::NotifyError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_BARK_SERVER: &str = "https://api.day.app";
pub const DEFAULT_BARK_GROUP: &str = "Claude Code";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Environment variable overriding the configuration file location
pub const CONFIG_ENV_VAR: &str = "TASK_NOTIFIER_CONFIG";

/// Logging level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LogLevel {
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "warn")]
    #[default]
    Warn,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "trace")]
    Trace,
}

impl std::str::FromStr for LogLevel {
    type Err = NotifyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(NotifyError::InvalidArgument(format!(
                "invalid log level '{}'",
                other
            ))),
        }
    }
}

/// Notifier configuration. Every key is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Bark push server base URL
    pub bark_server: String,
    /// Bark device key; empty disables the push channel
    pub bark_key: String,
    /// Bark group label
    pub bark_group: String,
    /// Play a sound cue
    pub sound_enabled: bool,
    /// Show a desktop notification
    pub system_notify_enabled: bool,
    /// Upper bound for each channel, in seconds
    pub timeout_seconds: u64,
    /// Logging verbosity level
    pub log_level: LogLevel,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            bark_server: DEFAULT_BARK_SERVER.to_string(),
            bark_key: String::new(),
            bark_group: DEFAULT_BARK_GROUP.to_string(),
            sound_enabled: true,
            system_notify_enabled: true,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            log_level: LogLevel::Warn,
        }
    }
}

impl Configuration {
    /// Load configuration from file.
    ///
    /// A missing file yields the defaults. `.toml` files are parsed as TOML,
    /// anything else as JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, NotifyError> {
        if !path.exists() {
            return Ok(Configuration::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| NotifyError::Config(format!("{}: {}", path.display(), e)))?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        if is_toml {
            toml::from_str(&content)
                .map_err(|e| NotifyError::Config(format!("{}: {}", path.display(), e)))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| NotifyError::Config(format!("{}: {}", path.display(), e)))
        }
    }

    /// Resolve the configuration path: explicit path, then the
    /// `TASK_NOTIFIER_CONFIG` variable, then the user config directory.
    pub fn resolve_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
        explicit
            .or_else(|| {
                std::env::var_os(CONFIG_ENV_VAR)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| Self::default_config_path().ok())
    }

    /// Get the XDG config directory path
    pub fn default_config_path() -> Result<PathBuf, NotifyError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            NotifyError::Config("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("task-notifier").join("config.json"))
    }

    /// Whether the push channel has a credential to work with
    pub fn push_enabled(&self) -> bool {
        !self.bark_key.trim().is_empty()
    }

    /// Per-channel bound; zero falls back to the default.
    pub fn channel_timeout(&self) -> Duration {
        match self.timeout_seconds {
            0 => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.push_enabled() {
            if let Err(e) = url::Url::parse(self.bark_server.trim()) {
                errors.push(format!("bark_server is not a valid URL: {}", e));
            }
        }

        if self.timeout_seconds > 300 {
            errors.push("timeout_seconds cannot exceed 300 (5 minutes)".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
