use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecapiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Failed to parse JSON response at '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl DecapiError {
    /// The request never produced a body (connection, DNS, transport timeout).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Request(_) | Self::HttpClient(_))
    }

    /// A body arrived but was not the expected JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json { .. })
    }
}

impl From<url::ParseError> for DecapiError {
    fn from(e: url::ParseError) -> Self {
        DecapiError::InvalidBaseUrl(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_taxonomy() {
        let network = DecapiError::HttpClient("connection refused".to_string());
        assert!(network.is_network());
        assert!(!network.is_decode());

        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let decode = DecapiError::Json {
            path: ".".to_string(),
            source,
        };
        assert!(decode.is_decode());
        assert!(!decode.is_network());

        let config = DecapiError::InvalidBaseUrl("relative URL without a base".to_string());
        assert!(!config.is_network());
        assert!(!config.is_decode());
    }
}
