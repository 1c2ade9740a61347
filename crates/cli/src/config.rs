use std::path::Path;

use decapi::DecapiConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load client configuration from a TOML file.
/// Falls back to defaults if the file doesn't exist.
pub async fn load(path: &Path) -> Result<DecapiConfig, ConfigError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => {
            let config = parse(&content)?;
            tracing::info!("Loaded config from {}", path.display());
            Ok(config)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(DecapiConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn parse(content: &str) -> Result<DecapiConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}
