//! Desktop notification channel

use crate::channels::NotificationChannel;
use crate::error::ChannelError;
use crate::models::{ChannelKind, NotificationRequest};
use crate::platform::{presenter_for, Platform, Presenter};
use async_trait::async_trait;
use std::sync::Arc;

/// Shows the notification through the host platform's presenter.
pub struct DesktopChannel {
    presenter: Result<Arc<dyn Presenter>, Platform>,
}

impl DesktopChannel {
    /// Presenter for the platform detected at call time
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
impl NotificationChannel for DesktopChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Desktop
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), ChannelError> {
        let presenter = self
            .presenter
            .as_ref()
            .map_err(|platform| ChannelError::UnsupportedPlatform(platform.to_string()))?;
        presenter.show(request.title(), request.message()).await?;
        tracing::debug!(platform = presenter.name(), "desktop notification shown");
        Ok(())
    }
}
