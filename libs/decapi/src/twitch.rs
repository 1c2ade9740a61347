use url::Url;

use crate::client::{endpoint, DecapiClient};
use crate::models::{TwitchStatus, TwitchUptime};

/// Returned by /twitch/uptime in place of a duration when the channel is offline.
pub const DEFAULT_OFFLINE_MSG: &str = "-1";

/// Parameters for GET /twitch/uptime/{channel}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitchUptimeQuery {
    pub offline_msg: String,
}

impl Default for TwitchUptimeQuery {
    fn default() -> Self {
        Self {
            offline_msg: DEFAULT_OFFLINE_MSG.to_string(),
        }
    }
}

impl TwitchUptimeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offline_msg(mut self, offline_msg: impl ToString) -> Self {
        self.offline_msg = offline_msg.to_string();
        self
    }

    pub fn url(&self, base: &Url, channel: &str) -> crate::Result<Url> {
        let mut url = endpoint(base, &["twitch", "uptime", channel])?;
        url.query_pairs_mut()
            .append_pair("offline_msg", &self.offline_msg);
        Ok(url)
    }
}

pub(crate) fn title_url(base: &Url, channel: &str) -> crate::Result<Url> {
    endpoint(base, &["twitch", "title", channel])
}

impl DecapiClient {
    /// How long the configured channel has been live, as raw text.
    ///
    /// GET /twitch/uptime/{channel}
    ///
    /// The body equals `query.offline_msg` when the channel is offline.
    pub async fn fetch_twitch_live_duration(
        &self,
        query: &TwitchUptimeQuery,
    ) -> crate::Result<String> {
        let url = query.url(&self.base_url()?, &self.config().twitch_channel)?;
        self.get_text(&url).await
    }

    /// Current stream title of the configured channel, as raw text.
    ///
    /// GET /twitch/title/{channel}
    pub async fn fetch_twitch_title(&self) -> crate::Result<String> {
        let url = title_url(&self.base_url()?, &self.config().twitch_channel)?;
        self.get_text(&url).await
    }

    /// Fetch uptime and title concurrently.
    ///
    /// Fails with the uptime error, else the title error.
    pub async fn fetch_twitch_status(
        &self,
        query: &TwitchUptimeQuery,
    ) -> crate::Result<TwitchStatus> {
        let (uptime, title) = tokio::join!(
            self.fetch_twitch_live_duration(query),
            self.fetch_twitch_title(),
        );

        Ok(TwitchStatus {
            uptime: TwitchUptime::from_body(&uptime?, &query.offline_msg),
            title: title?,
        })
    }
}
