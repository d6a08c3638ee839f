//! Per-channel outcomes and the aggregate dispatch report

use super::Level;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Delivery channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChannelKind {
    #[serde(rename = "push")]
    Push,
    #[serde(rename = "desktop")]
    Desktop,
    #[serde(rename = "sound")]
    Sound,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [ChannelKind::Push, ChannelKind::Desktop, ChannelKind::Sound];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Push => "push",
            ChannelKind::Desktop => "desktop",
            ChannelKind::Sound => "sound",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChannelStatus {
    #[serde(rename = "not_attempted")]
    NotAttempted,
    #[serde(rename = "succeeded")]
    Succeeded,
    #[serde(rename = "failed")]
    Failed,
}

/// Result of one channel for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelOutcome {
    pub channel: ChannelKind,
    pub status: ChannelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ChannelOutcome {
    pub fn not_attempted(channel: ChannelKind) -> Self {
        Self {
            channel,
            status: ChannelStatus::NotAttempted,
            error: None,
        }
    }

    pub fn succeeded(channel: ChannelKind) -> Self {
        Self {
            channel,
            status: ChannelStatus::Succeeded,
            error: None,
        }
    }

    pub fn failed(channel: ChannelKind, error: impl Into<String>) -> Self {
        Self {
            channel,
            status: ChannelStatus::Failed,
            error: Some(error.into()),
        }
    }

    pub fn attempted(&self) -> bool {
        self.status != ChannelStatus::NotAttempted
    }

    pub fn is_success(&self) -> bool {
        self.status == ChannelStatus::Succeeded
    }
}

/// Aggregate result of one dispatch
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub outcomes: Vec<ChannelOutcome>,
}

impl DispatchReport {
    pub fn new(level: Level, outcomes: Vec<ChannelOutcome>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            outcomes,
        }
    }

    pub fn outcome(&self, channel: ChannelKind) -> Option<&ChannelOutcome> {
        self.outcomes.iter().find(|o| o.channel == channel)
    }

    pub fn attempted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.attempted()).count()
    }

    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Nothing was attempted because every channel is disabled
    pub fn is_noop(&self) -> bool {
        self.attempted_count() == 0
    }

    /// Succeeds when nothing was attempted or at least one attempt succeeded.
    pub fn is_success(&self) -> bool {
        self.is_noop() || self.succeeded_count() > 0
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}
