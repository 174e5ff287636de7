use crate::model::{ForecastResponse, PresentedItem};

/// Number of 3-hour slices exposed to clients, roughly the next 24 hours.
pub const FORECAST_WINDOW: usize = 8;

/// Reshape a provider forecast into at most [`FORECAST_WINDOW`] flat items,
/// keeping the provider's order.
pub fn present(forecast: ForecastResponse) -> Vec<PresentedItem> {
    present_first(forecast, FORECAST_WINDOW)
}

/// Same as [`present`] with a caller-chosen window.
pub fn present_first(forecast: ForecastResponse, count: usize) -> Vec<PresentedItem> {
    forecast
        .list
        .into_iter()
        .take(count)
        .map(PresentedItem::from)
        .collect()
}
