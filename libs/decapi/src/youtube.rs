use url::Url;

use crate::client::{endpoint, DecapiClient};
use crate::models::LatestVideo;

/// Channel whose latest upload is fetched when no id is given.
pub const DEFAULT_CHANNEL_ID: &str = "UCkDwFvETfXmnIwpX7lV3F1g";

/// Response template sent as `format`. decapi substitutes `{id}` and `{title}`.
pub const DEFAULT_FORMAT: &str = r#"{"id":"{id}","title":"{title}"}"#;

/// Parameters for GET /youtube/latest_video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YoutubeQuery {
    pub channel_id: String,
    /// Sent verbatim; the remote service performs the substitution
    pub format: String,
    pub no_livestream: bool,
    pub no_shorts: bool,
    /// Number of most recent uploads to skip
    pub skip: u32,
}

impl Default for YoutubeQuery {
    fn default() -> Self {
        Self {
            channel_id: DEFAULT_CHANNEL_ID.to_string(),
            format: DEFAULT_FORMAT.to_string(),
            no_livestream: false,
            no_shorts: false,
            skip: 0,
        }
    }
}

impl YoutubeQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// The upload before the latest one.
    pub fn previous() -> Self {
        Self::default().skip(1)
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn no_livestream(mut self, no_livestream: bool) -> Self {
        self.no_livestream = no_livestream;
        self
    }

    pub fn no_shorts(mut self, no_shorts: bool) -> Self {
        self.no_shorts = no_shorts;
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    /// Build the request URL beneath `base`.
    pub fn url(&self, base: &Url) -> crate::Result<Url> {
        let mut url = endpoint(base, &["youtube", "latest_video"])?;
        url.query_pairs_mut()
            .append_pair("format", &self.format)
            .append_pair("id", &self.channel_id)
            .append_pair("no_livestream", flag(self.no_livestream))
            .append_pair("no_shorts", flag(self.no_shorts))
            .append_pair("skip", &self.skip.to_string());
        Ok(url)
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

impl DecapiClient {
    /// Fetch the latest video of a YouTube channel.
    ///
    /// GET /youtube/latest_video
    ///
    /// The body is returned as untyped JSON, whatever shape the remote
    /// service produced. Use [`fetch_latest_video_typed`](Self::fetch_latest_video_typed)
    /// to validate it against the default `{id, title}` template.
    pub async fn fetch_latest_video(
        &self,
        query: &YoutubeQuery,
    ) -> crate::Result<serde_json::Value> {
        let url = query.url(&self.base_url()?)?;
        self.get_json(&url).await
    }

    /// Fetch the latest video and validate it as `{id, title}`.
    ///
    /// Only meaningful when `query.format` produces that shape.
    pub async fn fetch_latest_video_typed(
        &self,
        query: &YoutubeQuery,
    ) -> crate::Result<LatestVideo> {
        let url = query.url(&self.base_url()?)?;
        self.get_json(&url).await
    }
}
