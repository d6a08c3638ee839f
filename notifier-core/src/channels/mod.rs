//! Delivery channels: push, desktop and sound
//!
//! Each channel delivers one request and reports its own failure. A failing
//! channel must never block the others; the dispatcher relies on that.

mod bark;
mod desktop;
mod sound;

pub use bark::BarkChannel;
pub use desktop::DesktopChannel;
pub use sound::SoundChannel;

use crate::error::ChannelError;
use crate::models::{ChannelKind, NotificationRequest};
use async_trait::async_trait;

/// Outbound delivery of a notification through one mechanism
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    /// Which of the three channels this is.
    fn kind(&self) -> ChannelKind;

    /// Deliver the notification. Failures are returned, not panicked.
    async fn deliver(&self, request: &NotificationRequest) -> Result<(), ChannelError>;
}
