//! Bark push provider: one GET per notification

use crate::channels::NotificationChannel;
use crate::error::ChannelError;
use crate::models::{ChannelKind, Configuration, NotificationRequest};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("task-notifier/", env!("CARGO_PKG_VERSION"));

/// Bark response body
#[derive(Debug, Deserialize)]
struct BarkResponse {
    code: i64,
    #[serde(default)]
    message: Option<String>,
}

/// Bark push channel. Never log the device key.
pub struct BarkChannel {
    server: String,
    key: String,
    group: String,
    client: Client,
}

impl BarkChannel {
    pub fn new(server: String, key: String, group: String) -> Result<Self, ChannelError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            server,
            key,
            group,
            client,
        })
    }

    pub fn from_config(config: &Configuration) -> Result<Self, ChannelError> {
        Self::new(
            config.bark_server.trim().to_string(),
            config.bark_key.trim().to_string(),
            config.bark_group.clone(),
        )
    }

    /// `{server}/{key}/{title}/{body}?group=..&icon=..&sound=..&level=..`
    pub(crate) fn request_url(&self, request: &NotificationRequest) -> Result<Url, ChannelError> {
        let profile = request.level().profile();
        let mut url = Url::parse(&self.server)
            .map_err(|e| ChannelError::InvalidUrl(format!("{}: {}", self.server, e)))?;

        url.path_segments_mut()
            .map_err(|_| ChannelError::InvalidUrl(self.server.clone()))?
            .pop_if_empty()
            .push(&self.key)
            .push(profile.title)
            .push(request.message());

        url.query_pairs_mut()
            .append_pair("group", &self.group)
            .append_pair("icon", profile.bark_icon)
            .append_pair("sound", profile.bark_sound)
            .append_pair("level", profile.bark_interruption);

        Ok(url)
    }
}

#[async_trait]
impl NotificationChannel for BarkChannel {
    fn kind(&self) -> ChannelKind {
        ChannelKind::Push
    }

    async fn deliver(&self, request: &NotificationRequest) -> Result<(), ChannelError> {
        let url = self.request_url(request)?;
        let res = self.client.get(url).send().await?;
        if !res.status().is_success() {
            return Err(ChannelError::Status(res.status().as_u16()));
        }

        let body: BarkResponse = res.json().await?;
        if body.code != 200 {
            return Err(ChannelError::Provider(
                body.message
                    .unwrap_or_else(|| format!("unexpected code {}", body.code)),
            ));
        }

        tracing::debug!(level = %request.level(), "bark notification accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(server: &str) -> BarkChannel {
        BarkChannel::new(server.into(), "device_key".into(), "Builds".into()).unwrap()
    }

    #[test]
    fn test_request_url() {
        let request = NotificationRequest::parse("success", "Build completed in 2m 15s").unwrap();
        let url = channel("https://api.day.app").request_url(&request).unwrap();

        let segments: Vec<_> = url.path_segments().unwrap().collect();
        assert_eq!(segments[0], "device_key");
        assert_eq!(segments.len(), 3);
        assert!(url.path().ends_with("/Build%20completed%20in%202m%2015s"));

        let query: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(query.contains(&("group".into(), "Builds".into())));
        assert!(query.contains(&("sound".into(), "bell".into())));
        assert!(query.contains(&("level".into(), "active".into())));
        assert!(query.iter().any(|(k, v)| k == "icon" && v.contains("4CAF50")));
    }

    #[test]
    fn test_request_url_keeps_server_path() {
        let request = NotificationRequest::parse("error", "a/b").unwrap();
        let url = channel("https://push.example.com/bark/").request_url(&request).unwrap();
        assert!(url.path().starts_with("/bark/device_key/"));
        assert!(url.path().ends_with("/a%2Fb"));
        assert!(url
            .query_pairs()
            .any(|(k, v)| k == "level" && v == "timeSensitive"));
    }

    #[test]
    fn test_invalid_server() {
        let request = NotificationRequest::parse("info", "hi").unwrap();
        assert!(matches!(
            channel("not a url").request_url(&request),
            Err(ChannelError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_channel_kind() {
        assert_eq!(channel("https://api.day.app").kind(), ChannelKind::Push);
    }
}
