mod client;
mod config;
mod error;
mod fetcher;
#[cfg(test)]
mod mocks;
pub mod models;
mod twitch;
mod youtube;

pub use client::DecapiClient;
pub use config::DecapiConfig;
pub use error::DecapiError;
pub use fetcher::{HttpFetcher, ReqwestFetcher};
pub use models::{LatestVideo, TwitchStatus, TwitchUptime};
pub use twitch::{TwitchUptimeQuery, DEFAULT_OFFLINE_MSG};
pub use youtube::{YoutubeQuery, DEFAULT_CHANNEL_ID, DEFAULT_FORMAT};

pub use url::Url;

pub type Result<T> = std::result::Result<T, DecapiError>;
