use serde::{Deserialize, Serialize};

/// Decoded body of the provider's 5-day / 3-hour forecast endpoint.
///
/// Only the fields the presenter needs are modelled; everything else in the
/// provider payload (`city`, `cnt`, `weather`, `wind`, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour slice of the forecast.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastEntry {
    pub main: MainReadings,
    /// Probability of precipitation, passed through as the provider sends it.
    pub pop: f64,
    pub dt_txt: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
}

/// Flattened forecast slice handed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentedItem {
    pub dt_txt: String,
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: i64,
    pub pop: f64,
}

impl From<ForecastEntry> for PresentedItem {
    fn from(entry: ForecastEntry) -> Self {
        Self {
            dt_txt: entry.dt_txt,
            temp: entry.main.temp,
            feels_like: entry.main.feels_like,
            humidity: entry.main.humidity,
            pop: entry.pop,
        }
    }
}

/// Success body of `GET /api/weather`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherPayload {
    pub city: String,
    pub list: Vec<PresentedItem>,
}
