//! Core library for the weather forecast proxy.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather forecast fetcher
//! - The presenter that trims and flattens forecasts for clients
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod model;
pub mod presenter;
pub mod provider;

pub use config::{Config, ProviderSettings, ServerSettings};
pub use model::{ForecastEntry, ForecastResponse, MainReadings, PresentedItem, WeatherPayload};
pub use presenter::{FORECAST_WINDOW, present, present_first};
pub use provider::{
    FetchError, ForecastFetcher, fetcher_from_config, openweather::OpenWeatherFetcher,
};
