use serde::{Deserialize, Serialize};

pub(crate) const BASE_URL: &str = "https://decapi.me";
pub(crate) const TWITCH_CHANNEL: &str = "afor_digital";
pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Configuration for a [`DecapiClient`](crate::DecapiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecapiConfig {
    /// Root of the remote API, endpoints are appended as path segments
    pub base_url: String,
    /// Channel used by the Twitch uptime and title endpoints
    pub twitch_channel: String,
    /// Sent as the User-Agent header on every request
    pub user_agent: String,
}

impl Default for DecapiConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            twitch_channel: TWITCH_CHANNEL.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl DecapiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_twitch_channel(mut self, channel: impl Into<String>) -> Self {
        self.twitch_channel = channel.into();
        self
    }
}
