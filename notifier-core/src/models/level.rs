//! Notification levels and their fixed presentation profiles

use crate::error::NotifyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity/category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "error")]
    Error,
    #[serde(rename = "info")]
    Info,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Success, Level::Error, Level::Info];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Success => "success",
            Level::Error => "error",
            Level::Info => "info",
        }
    }

    /// Presentation parameters for this level
    pub fn profile(&self) -> &'static LevelProfile {
        match self {
            Level::Success => &SUCCESS_PROFILE,
            Level::Error => &ERROR_PROFILE,
            Level::Info => &INFO_PROFILE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = NotifyError;

    /// Case-sensitive: only the lowercase names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(Level::Success),
            "error" => Ok(Level::Error),
            "info" => Ok(Level::Info),
            other => Err(NotifyError::InvalidArgument(format!(
                "invalid level '{}' (valid levels: success, error, info)",
                other
            ))),
        }
    }
}

/// Fixed presentation table entry for a level
#[derive(Debug, PartialEq, Eq)]
pub struct LevelProfile {
    /// Glyph prefixed to the title
    pub glyph: &'static str,
    /// Desktop/push title, glyph included
    pub title: &'static str,
    /// Host sound name (macOS system sound naming)
    pub sound: &'static str,
    /// Sound name understood by the Bark app
    pub bark_sound: &'static str,
    /// Icon shown by the Bark app
    pub bark_icon: &'static str,
    /// Bark interruption level
    pub bark_interruption: &'static str,
}

static SUCCESS_PROFILE: LevelProfile = LevelProfile {
    glyph: "✓",
    title: "✓ Task Completed",
    sound: "Glass",
    bark_sound: "bell",
    bark_icon: "https://via.placeholder.com/80/4CAF50/FFFFFF?text=✓",
    bark_interruption: "active",
};

static ERROR_PROFILE: LevelProfile = LevelProfile {
    glyph: "✕",
    title: "✕ Task Failed",
    sound: "Basso",
    bark_sound: "alarm",
    bark_icon: "https://via.placeholder.com/80/F44336/FFFFFF?text=✕",
    bark_interruption: "timeSensitive",
};

static INFO_PROFILE: LevelProfile = LevelProfile {
    glyph: "ℹ",
    title: "ℹ Task Notification",
    sound: "Ping",
    bark_sound: "bell",
    bark_icon: "https://via.placeholder.com/80/2196F3/FFFFFF?text=i",
    bark_interruption: "active",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table() {
        let expected = [
            (Level::Success, "✓", "Glass"),
            (Level::Error, "✕", "Basso"),
            (Level::Info, "ℹ", "Ping"),
        ];
        for (level, glyph, sound) in expected {
            let profile = level.profile();
            assert_eq!(profile.glyph, glyph, "glyph for {}", level);
            assert_eq!(profile.sound, sound, "sound for {}", level);
            assert!(profile.title.starts_with(glyph));
        }
    }

    #[test]
    fn test_parse_levels() {
        for level in Level::ALL {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!(matches!(
            "Success".parse::<Level>(),
            Err(NotifyError::InvalidArgument(_))
        ));
        assert!("bogus".parse::<Level>().is_err());
        assert!("".parse::<Level>().is_err());
    }
}
