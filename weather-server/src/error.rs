//! API error handling

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use weather_core::FetchError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("city is required")]
    MissingCity,

    #[error(transparent)]
    Upstream(#[from] FetchError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingCity => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Upstream(err) = &self {
            tracing::warn!(error = %err, "Forecast fetch failed");
        }

        let body = ErrorResponse { error: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
