//! Fan-out of one notification across the push, desktop and sound channels

use crate::channels::{BarkChannel, DesktopChannel, NotificationChannel, SoundChannel};
use crate::error::{ChannelError, NotifyError};
use crate::models::{
    ChannelKind, ChannelOutcome, Configuration, DispatchReport, NotificationRequest,
};
use futures_util::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// State of one channel slot for this invocation
#[derive(Clone)]
pub enum ChannelSlot {
    /// Turned off by configuration; not attempted
    Disabled,
    Ready(Arc<dyn NotificationChannel>),
    /// Enabled but could not be set up; counts as a failed attempt
    Broken(String),
}

impl ChannelSlot {
    pub fn ready(channel: impl NotificationChannel + 'static) -> Self {
        ChannelSlot::Ready(Arc::new(channel))
    }
}

/// Dispatches a request to every enabled channel concurrently and aggregates
/// the outcomes.
#[derive(Clone)]
pub struct Dispatcher {
    push: ChannelSlot,
    desktop: ChannelSlot,
    sound: ChannelSlot,
    channel_timeout: Duration,
}

impl Dispatcher {
    /// Dispatcher with every channel disabled
    pub fn new(channel_timeout: Duration) -> Self {
        Self {
            push: ChannelSlot::Disabled,
            desktop: ChannelSlot::Disabled,
            sound: ChannelSlot::Disabled,
            channel_timeout,
        }
    }

    /// Build the channels the configuration enables. An empty `bark_key`
    /// disables push only.
    pub fn from_config(config: &Configuration) -> Self {
        let mut dispatcher = Self::new(config.channel_timeout());

        if config.push_enabled() {
            dispatcher = match BarkChannel::from_config(config) {
                Ok(channel) => dispatcher.with_channel(channel),
                Err(e) => dispatcher.with_push(ChannelSlot::Broken(e.to_string())),
            };
        } else {
            tracing::info!("bark_key is empty, skipping push notification");
        }

        if config.system_notify_enabled {
            dispatcher = dispatcher.with_channel(DesktopChannel::detect());
        }

        if config.sound_enabled {
            dispatcher = dispatcher.with_channel(SoundChannel::detect());
        }

        dispatcher
    }

    /// Install `channel` in the slot matching its kind
    pub fn with_channel(self, channel: impl NotificationChannel + 'static) -> Self {
        let kind = channel.kind();
        let slot = ChannelSlot::ready(channel);
        match kind {
            ChannelKind::Push => self.with_push(slot),
            ChannelKind::Desktop => self.with_desktop(slot),
            ChannelKind::Sound => self.with_sound(slot),
        }
    }

    pub fn with_push(mut self, slot: ChannelSlot) -> Self {
        self.push = slot;
        self
    }

    pub fn with_desktop(mut self, slot: ChannelSlot) -> Self {
        self.desktop = slot;
        self
    }

    pub fn with_sound(mut self, slot: ChannelSlot) -> Self {
        self.sound = slot;
        self
    }

    /// Deliver `request` on every enabled channel. Never fails: channel errors
    /// end up in the report.
    pub async fn dispatch(&self, request: &NotificationRequest) -> DispatchReport {
        let slots = [
            (ChannelKind::Push, &self.push),
            (ChannelKind::Desktop, &self.desktop),
            (ChannelKind::Sound, &self.sound),
        ];

        let outcomes = join_all(
            slots
                .into_iter()
                .map(|(kind, slot)| self.run_slot(kind, slot, request)),
        )
        .await;

        let report = DispatchReport::new(request.level(), outcomes);
        if report.is_noop() {
            tracing::info!("all channels disabled, nothing to do");
        }
        tracing::info!(
            level = %request.level(),
            attempted = report.attempted_count(),
            succeeded = report.succeeded_count(),
            "notification dispatched"
        );
        report
    }

    async fn run_slot(
        &self,
        kind: ChannelKind,
        slot: &ChannelSlot,
        request: &NotificationRequest,
    ) -> ChannelOutcome {
        let channel = match slot {
            ChannelSlot::Disabled => return ChannelOutcome::not_attempted(kind),
            ChannelSlot::Broken(reason) => {
                tracing::warn!(channel = %kind, error = %reason, "channel unavailable");
                return ChannelOutcome::failed(kind, reason.clone());
            }
            ChannelSlot::Ready(channel) => channel,
        };

        let result = match timeout(self.channel_timeout, channel.deliver(request)).await {
            Ok(result) => result,
            Err(_) => Err(ChannelError::Timeout(self.channel_timeout)),
        };

        match result {
            Ok(()) => {
                tracing::info!(channel = %kind, level = %request.level(), "channel delivered");
                ChannelOutcome::succeeded(kind)
            }
            Err(e) => {
                tracing::warn!(channel = %kind, error = %e, "channel delivery failed");
                ChannelOutcome::failed(kind, e.to_string())
            }
        }
    }
}

/// Validate the arguments, then dispatch with the channels `config` enables.
///
/// Invalid arguments fail before any channel is attempted.
pub async fn notify(
    level: &str,
    message: &str,
    config: &Configuration,
) -> Result<DispatchReport, NotifyError> {
    let request = NotificationRequest::parse(level, message)?;
    Ok(Dispatcher::from_config(config).dispatch(&request).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_arguments_rejected() {
        let config = Configuration::default();
        assert!(matches!(
            notify("bogus", "msg", &config).await,
            Err(NotifyError::InvalidArgument(_))
        ));
        for level in ["success", "error", "info"] {
            assert!(matches!(
                notify(level, "", &config).await,
                Err(NotifyError::InvalidArgument(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_all_disabled_is_noop_success() {
        let config = Configuration {
            bark_key: String::new(),
            sound_enabled: false,
            system_notify_enabled: false,
            ..Configuration::default()
        };
        let report = notify("info", "nothing to see", &config).await.unwrap();
        assert!(report.is_noop());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.outcomes.len(), 3);
    }

    #[tokio::test]
    async fn test_from_config_places_enabled_channels() {
        let config = Configuration {
            sound_enabled: false,
            system_notify_enabled: true,
            ..Configuration::default()
        };
        let request = NotificationRequest::parse("info", "desktop only").unwrap();
        let report = Dispatcher::from_config(&config).dispatch(&request).await;

        assert!(!report.outcome(ChannelKind::Push).unwrap().attempted());
        assert!(report.outcome(ChannelKind::Desktop).unwrap().attempted());
        assert!(!report.outcome(ChannelKind::Sound).unwrap().attempted());
    }

    #[tokio::test]
    async fn test_broken_slot_counts_as_failure() {
        let dispatcher = Dispatcher::new(Duration::from_secs(1))
            .with_push(ChannelSlot::Broken("tls backend unavailable".to_string()));
        let request = NotificationRequest::parse("error", "boom").unwrap();
        let report = dispatcher.dispatch(&request).await;

        let push = report.outcome(ChannelKind::Push).unwrap();
        assert!(push.attempted());
        assert_eq!(push.error.as_deref(), Some("tls backend unavailable"));
        assert_eq!(report.exit_code(), 1);
    }
}
