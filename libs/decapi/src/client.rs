use std::sync::Arc;

use reqwest::Client;
use url::Url;

use crate::config::DecapiConfig;
use crate::error::DecapiError;
use crate::fetcher::{HttpFetcher, ReqwestFetcher};

/// Client for the decapi.me metadata endpoints.
///
/// Every call is a single GET with no retry, caching or shared state, so one
/// client can serve any number of concurrent callers.
pub struct DecapiClient {
    fetcher: Arc<dyn HttpFetcher>,
    config: DecapiConfig,
}

impl DecapiClient {
    /// Create a DecapiClient with a reqwest Client and default configuration.
    pub fn new(client: Client) -> Self {
        Self::with_config(client, DecapiConfig::default())
    }

    /// Create a DecapiClient with a reqwest Client and custom configuration.
    pub fn with_config(client: Client, config: DecapiConfig) -> Self {
        let fetcher = ReqwestFetcher::new(client, config.user_agent.clone());
        Self::with_fetcher(Arc::new(fetcher), config)
    }

    /// Create a DecapiClient on top of any transport.
    pub fn with_fetcher(fetcher: Arc<dyn HttpFetcher>, config: DecapiConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &DecapiConfig {
        &self.config
    }

    pub(crate) fn base_url(&self) -> crate::Result<Url> {
        Ok(Url::parse(&self.config.base_url)?)
    }

    pub(crate) async fn get_text(&self, url: &Url) -> crate::Result<String> {
        self.fetcher.get_text(url).await
    }

    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &Url,
    ) -> crate::Result<T> {
        let body = self.get_text(url).await?;
        decode(&body)
    }
}

/// Append path segments to `base`, keeping any path the base already carries.
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> crate::Result<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| DecapiError::InvalidBaseUrl(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &str) -> crate::Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| DecapiError::Json {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
