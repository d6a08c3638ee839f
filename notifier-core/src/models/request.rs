//! Notification request built from command-line input

use super::Level;
use crate::error::NotifyError;

/// A validated, immutable notification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    level: Level,
    message: String,
}

impl NotificationRequest {
    /// Build a request, rejecting an empty message.
    pub fn new(level: Level, message: impl Into<String>) -> Result<Self, NotifyError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(NotifyError::InvalidArgument(
                "message must not be empty".to_string(),
            ));
        }
        Ok(Self { level, message })
    }

    /// Parse both the level name and the message.
    pub fn parse(level: &str, message: &str) -> Result<Self, NotifyError> {
        Self::new(level.parse()?, message)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn title(&self) -> &'static str {
        self.level.profile().title
    }
}
