//! HTTP surface of the weather forecast proxy.
//!
//! This crate focuses on:
//! - Routing (`/`, `/static/*`, `/api/weather`)
//! - Mapping fetch failures onto HTTP error responses
//!
//! The `weather` binary in this crate wires it to configuration and the CLI.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
