//! Mocked HTTP layer for exercising `DecapiClient` without the network.
//!
//! ```ignore
//! let fetcher = MockFetcher::new();
//! fetcher.respond("/twitch/title/afor_digital", "Just chatting");
//! let client = fetcher.client();
//! assert_eq!(client.fetch_twitch_title().await?, "Just chatting");
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use url::Url;

use crate::{DecapiClient, DecapiConfig, DecapiError, HttpFetcher};

#[derive(Clone, Debug)]
enum MockResponse {
    Body(String),
    Error(String),
}

/// Answers requests by URL path and records every URL it was asked for.
#[derive(Clone, Default)]
pub struct MockFetcher {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `body` for any request whose path equals `path`.
    pub fn respond(&self, path: &str, body: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), MockResponse::Body(body.into()));
    }

    /// Fail any request whose path equals `path` with `HttpClient(message)`.
    pub fn fail(&self, path: &str, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), MockResponse::Error(message.into()));
    }

    /// All URLs requested so far, in order.
    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// The most recently requested URL.
    pub fn last_request(&self) -> Url {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    /// A client with default configuration wired to this mock.
    pub fn client(&self) -> DecapiClient {
        DecapiClient::with_fetcher(Arc::new(self.clone()), DecapiConfig::default())
    }
}

#[async_trait]
impl HttpFetcher for MockFetcher {
    async fn get_text(&self, url: &Url) -> crate::Result<String> {
        self.requests.lock().unwrap().push(url.clone());
        let response = self.responses.lock().unwrap().get(url.path()).cloned();
        match response {
            Some(MockResponse::Body(body)) => Ok(body),
            Some(MockResponse::Error(message)) => Err(DecapiError::HttpClient(message)),
            None => Err(DecapiError::HttpClient(format!(
                "no mock response for {}",
                url.path()
            ))),
        }
    }
}

/// Collect the query string of `url` into a map.
pub fn query_map(url: &Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}
