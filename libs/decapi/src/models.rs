//! Typed views over decapi responses.
//!
//! The client returns raw bodies; these are opt-in interpretations for
//! callers that want stronger guarantees.

use serde::{Deserialize, Serialize};

/// Latest upload as produced by the default `format` template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestVideo {
    pub id: String,
    pub title: String,
}

impl LatestVideo {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.id)
    }

    pub fn embed_url(&self) -> String {
        format!("https://www.youtube.com/embed/{}", self.id)
    }
}

/// Interpretation of a /twitch/uptime body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "duration", rename_all = "snake_case")]
pub enum TwitchUptime {
    Offline,
    /// Human-readable duration, e.g. "4 hours, 32 minutes"
    Live(String),
}

impl TwitchUptime {
    /// `sentinel` must be the `offline_msg` the request was sent with.
    pub fn from_body(body: &str, sentinel: &str) -> Self {
        let body = body.trim();
        if body == sentinel.trim() {
            TwitchUptime::Offline
        } else {
            TwitchUptime::Live(body.to_string())
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, TwitchUptime::Live(_))
    }
}

/// Uptime and title of a Twitch channel fetched together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitchStatus {
    pub uptime: TwitchUptime,
    pub title: String,
}
