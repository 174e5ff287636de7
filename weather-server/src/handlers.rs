//! Request handlers

use axum::{
    Json,
    extract::{RawQuery, State},
};
use url::form_urlencoded;
use weather_core::{WeatherPayload, present};

use crate::{error::ApiError, state::AppState};

/// First value of `name` in a raw query string.
fn first_param(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// `GET /api/weather?city=<name>`: the next 24 hours of forecast for `city`.
///
/// Only the first `city` value counts when the parameter is repeated.
pub async fn get_weather(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<WeatherPayload>, ApiError> {
    let city = first_param(query.as_deref(), "city")
        .filter(|c| !c.is_empty())
        .ok_or(ApiError::MissingCity)?;

    let forecast = state.fetcher.fetch(&city).await?;
    let list = present(forecast);

    Ok(Json(WeatherPayload { city, list }))
}
