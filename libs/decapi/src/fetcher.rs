//! HTTP transport used by the client.
//!
//! The client only ever needs "GET this URL, give me the body". Keeping that
//! behind a trait lets callers plug in their own transport and lets tests
//! answer requests without touching the network.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Fetches the body of a URL as text.
///
/// Implementations must hand failures back as-is; the client propagates
/// whatever error is returned here straight to its caller.
#[async_trait]
pub trait HttpFetcher: Send + Sync {
    async fn get_text(&self, url: &Url) -> crate::Result<String>;
}

/// [`HttpFetcher`] backed by a reqwest [`Client`].
pub struct ReqwestFetcher {
    client: Client,
    user_agent: String,
}

impl ReqwestFetcher {
    pub fn new(client: Client, user_agent: impl Into<String>) -> Self {
        Self {
            client,
            user_agent: user_agent.into(),
        }
    }
}

#[async_trait]
impl HttpFetcher for ReqwestFetcher {
    async fn get_text(&self, url: &Url) -> crate::Result<String> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;
        let status = response.status();
        // Non-2xx is not an error here: decapi reports problems in the body
        let body = response.text().await?;
        tracing::debug!("{} responded {} ({} bytes)", url, status.as_u16(), body.len());
        Ok(body)
    }
}
