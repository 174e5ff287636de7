use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{config::ProviderSettings, model::ForecastResponse};

use super::{FetchError, ForecastFetcher};

/// Client for the OpenWeather 5-day / 3-hour forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    api_key: SecretString,
    forecast_url: String,
    http: Client,
}

impl OpenWeatherFetcher {
    pub fn new(api_key: SecretString, settings: &ProviderSettings) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            api_key,
            forecast_url: format!("{}/forecast", settings.base_url.trim_end_matches('/')),
            http: builder.build()?,
        })
    }
}

/// Error body OpenWeather sends instead of a forecast, e.g. for an unknown city.
#[derive(Debug, Deserialize)]
struct OwErrorPayload {
    message: String,
}

#[async_trait]
impl ForecastFetcher for OpenWeatherFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, location: &str) -> Result<ForecastResponse, FetchError> {
        let res = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.expose_secret()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "Received forecast response");

        serde_json::from_str(&body).map_err(|source| FetchError::Decode {
            source,
            provider_message: serde_json::from_str::<OwErrorPayload>(&body)
                .ok()
                .map(|payload| payload.message),
        })
    }
}
