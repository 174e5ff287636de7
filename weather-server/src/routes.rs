//! Route definitions

use axum::{Router, routing::get};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use weather_core::ServerSettings;

use crate::{handlers, state::AppState};

/// Create the main router: the page at `/`, assets under `/static`, and the JSON API.
pub fn create_router(state: AppState, settings: &ServerSettings) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(settings.templates_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(&settings.static_dir))
        .route("/api/weather", get(handlers::get_weather))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
