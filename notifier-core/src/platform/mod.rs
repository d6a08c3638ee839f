//! Host platform detection and presenter lookup
//!
//! Desktop notifications and sound cues go through a [`Presenter`] chosen by
//! the detected platform family. Supporting another platform means adding a
//! variant and a presenter, not branching inside the channels.

mod command;
mod linux;
mod macos;
mod windows;

pub use linux::LinuxPresenter;
pub use macos::MacPresenter;
pub use windows::WindowsPresenter;

use crate::error::ChannelError;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Supported host platform families
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
    Unsupported(String),
}

impl Platform {
    /// Detect the platform this process runs on
    pub fn detect() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS name as reported by `std::env::consts::OS`
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Platform::MacOs,
            "linux" => Platform::Linux,
            "windows" => Platform::Windows,
            other => Platform::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => f.write_str("macOS"),
            Platform::Linux => f.write_str("Linux"),
            Platform::Windows => f.write_str("Windows"),
            Platform::Unsupported(os) => f.write_str(os),
        }
    }
}

/// Host-native presentation facility
#[async_trait]
pub trait Presenter: Send + Sync {
    /// Platform name for logging (e.g. "Linux").
    fn name(&self) -> &str;

    /// Show a desktop notification.
    async fn show(&self, title: &str, message: &str) -> Result<(), ChannelError>;

    /// Play a sound cue. `sound` uses the macOS system sound names
    /// (Glass, Basso, Ping); other platforms map them to their own assets.
    async fn play(&self, sound: &str) -> Result<(), ChannelError>;
}

/// Look up the presenter for a platform
pub fn presenter_for(platform: &Platform) -> Result<Arc<dyn Presenter>, ChannelError> {
    match platform {
        Platform::MacOs => Ok(Arc::new(MacPresenter::new())),
        Platform::Linux => Ok(Arc::new(LinuxPresenter::new())),
        Platform::Windows => Ok(Arc::new(WindowsPresenter::new())),
        Platform::Unsupported(os) => Err(ChannelError::UnsupportedPlatform(os.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_os() {
        assert_eq!(Platform::from_os("macos"), Platform::MacOs);
        assert_eq!(Platform::from_os("linux"), Platform::Linux);
        assert_eq!(Platform::from_os("windows"), Platform::Windows);
        assert_eq!(
            Platform::from_os("freebsd"),
            Platform::Unsupported("freebsd".to_string())
        );
    }

    #[test]
    fn test_presenter_lookup() {
        assert_eq!(presenter_for(&Platform::MacOs).unwrap().name(), "macOS");
        assert_eq!(presenter_for(&Platform::Linux).unwrap().name(), "Linux");
        assert_eq!(presenter_for(&Platform::Windows).unwrap().name(), "Windows");

        match presenter_for(&Platform::Unsupported("haiku".to_string())) {
            Err(ChannelError::UnsupportedPlatform(os)) => assert_eq!(os, "haiku"),
            _ => panic!("expected UnsupportedPlatform"),
        }
    }
}
