//! Sound cue channel

use crate::channels::NotificationChannel;
use crate::error::ChannelError;
use crate::models::{ChannelKind, NotificationRequest};
use crate::platform::{presenter_for, Platform, Presenter};
use async_trait::async_trait;
use std::sync::Arc;

/// Plays the level's sound through the host platform's presenter.
pub struct SoundChannel {
    presenter: Result<Arc<dyn Presenter>, Platform>,
}

impl SoundChannel {
    pub fn detect() -> Self {
        Self::for_platform(Platform::detect())
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self {
            presenter: presenter_for(&platform).map_err(|_| platform),
        }
    }

    pub fn with_presenter(presenter: Arc<dyn Presenter>) -> Self {
        Self {
            presenter: Ok(presenter),
        }
    }
}

#[async_trait]
impl NotificationChannel for SoundChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Sound
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), ChannelError> {
        let presenter = self
            .presenter
            .as_ref()
            .map_err(|platform| ChannelError::UnsupportedPlatform(platform.to_string()))?;
        let sound = request.level().profile().sound;
        presenter.play(sound).await?;
        tracing::debug!(platform = presenter.name(), sound, "sound played");
        Ok(())
    }
}
