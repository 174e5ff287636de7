use std::sync::Arc;

use weather_core::ForecastFetcher;

/// Shared, read-only handler state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub fetcher: Arc<dyn ForecastFetcher>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn ForecastFetcher>) -> Self {
        Self { fetcher }
    }
}
