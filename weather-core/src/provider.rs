use crate::{Config, model::ForecastResponse, provider::openweather::OpenWeatherFetcher};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};
use thiserror::Error;

pub mod openweather;

/// Why a forecast could not be obtained.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider could not be reached or the body could not be read.
    #[error("failed to reach forecast provider: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not a forecast (malformed JSON or a provider error payload).
    #[error("failed to parse forecast JSON: {source}{}", provider_hint(.provider_message))]
    Decode {
        #[source]
        source: serde_json::Error,
        provider_message: Option<String>,
    },
}

fn provider_hint(message: &Option<String>) -> String {
    match message {
        Some(msg) => format!(" (provider said: {msg})"),
        None => String::new(),
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the credential.
        FetchError::Transport(err.without_url())
    }
}

#[async_trait]
pub trait ForecastFetcher: Send + Sync + Debug {
    /// Fetch the full forecast for `location`, which must be non-empty.
    async fn fetch(&self, location: &str) -> Result<ForecastResponse, FetchError>;
}

/// Construct the OpenWeather fetcher from config.
pub fn fetcher_from_config(config: &Config) -> anyhow::Result<Arc<dyn ForecastFetcher>> {
    let api_key = config.require_api_key()?.clone();
    let fetcher = OpenWeatherFetcher::new(api_key, &config.provider)?;
    Ok(Arc::new(fetcher))
}
