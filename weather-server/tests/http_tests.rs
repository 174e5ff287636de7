//! Integration tests for the HTTP surface

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;
use weather_core::{
    FetchError, ForecastEntry, ForecastFetcher, ForecastResponse, MainReadings, ServerSettings,
    WeatherPayload,
};
use weather_server::{AppState, create_router};

/// What the stub provider answers with.
#[derive(Debug)]
enum Reply {
    Forecast(ForecastResponse),
    Garbage,
}

#[derive(Debug)]
struct StubFetcher {
    reply: Reply,
    calls: AtomicUsize,
    last_location: std::sync::Mutex<Option<String>>,
}

impl StubFetcher {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self { reply, calls: AtomicUsize::new(0), last_location: Default::default() })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ForecastFetcher for StubFetcher {
    async fn fetch(&self, location: &str) -> Result<ForecastResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_location.lock().expect("lock") = Some(location.to_string());

        match &self.reply {
            Reply::Forecast(forecast) => Ok(forecast.clone()),
            Reply::Garbage => {
                let source = serde_json::from_str::<ForecastResponse>("<html>").unwrap_err();
                Err(FetchError::Decode { source, provider_message: None })
            }
        }
    }
}

fn uniform_forecast(len: usize) -> ForecastResponse {
    ForecastResponse {
        list: (0..len)
            .map(|i| ForecastEntry {
                main: MainReadings { temp: 15.2, feels_like: 14.0, humidity: 70 },
                pop: 0.3,
                dt_txt: format!("2024-03-{:02} {:02}:00:00", 1 + i / 8, (i % 8) * 3),
            })
            .collect(),
    }
}

fn asset_settings() -> ServerSettings {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
    ServerSettings {
        static_dir: root.join("static"),
        templates_dir: root.join("templates"),
        ..Default::default()
    }
}

fn server_with(fetcher: Arc<StubFetcher>) -> TestServer {
    let app = create_router(AppState::new(fetcher), &asset_settings());
    TestServer::new(app).expect("test server")
}

#[tokio::test]
async fn london_with_forty_entries_returns_first_eight() {
    let fetcher = StubFetcher::new(Reply::Forecast(uniform_forecast(40)));
    let server = server_with(fetcher.clone());

    let response = server.get("/api/weather").add_query_param("city", "London").await;

    response.assert_status_ok();
    let payload: WeatherPayload = response.json();
    assert_eq!(payload.city, "London");
    assert_eq!(payload.list.len(), 8);
    for (i, item) in payload.list.iter().enumerate() {
        assert_eq!(item.dt_txt, format!("2024-03-01 {:02}:00:00", i * 3));
        assert_eq!(item.temp, 15.2);
        assert_eq!(item.feels_like, 14.0);
        assert_eq!(item.humidity, 70);
        assert_eq!(item.pop, 0.3);
    }
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(fetcher.last_location.lock().expect("lock").as_deref(), Some("London"));
}

#[tokio::test]
async fn success_body_has_exact_shape() {
    let server = server_with(StubFetcher::new(Reply::Forecast(uniform_forecast(1))));

    let response = server.get("/api/weather").add_query_param("city", "London").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "city": "London",
        "list": [{
            "dt_txt": "2024-03-01 00:00:00",
            "temp": 15.2,
            "feels_like": 14.0,
            "humidity": 70,
            "pop": 0.3
        }]
    }));
}

#[tokio::test]
async fn three_entry_forecast_passes_through_in_order() {
    let forecast = ForecastResponse {
        list: vec![
            ForecastEntry {
                main: MainReadings { temp: 1.5, feels_like: -1.0, humidity: 90 },
                pop: 0.9,
                dt_txt: "2024-01-01 00:00:00".into(),
            },
            ForecastEntry {
                main: MainReadings { temp: 2.5, feels_like: 0.5, humidity: 85 },
                pop: 0.4,
                dt_txt: "2024-01-01 03:00:00".into(),
            },
            ForecastEntry {
                main: MainReadings { temp: 4.0, feels_like: 2.0, humidity: 80 },
                pop: 0.0,
                dt_txt: "2024-01-01 06:00:00".into(),
            },
        ],
    };
    let server = server_with(StubFetcher::new(Reply::Forecast(forecast.clone())));

    let response = server.get("/api/weather").add_query_param("city", "Oslo").await;

    response.assert_status_ok();
    let payload: WeatherPayload = response.json();
    assert_eq!(payload.list.len(), 3);
    for (item, entry) in payload.list.iter().zip(&forecast.list) {
        assert_eq!(item.dt_txt, entry.dt_txt);
        assert_eq!(item.temp, entry.main.temp);
        assert_eq!(item.feels_like, entry.main.feels_like);
        assert_eq!(item.humidity, entry.main.humidity);
        assert_eq!(item.pop, entry.pop);
    }
}

#[tokio::test]
async fn empty_forecast_yields_empty_list() {
    let server = server_with(StubFetcher::new(Reply::Forecast(uniform_forecast(0))));

    let response = server.get("/api/weather").add_query_param("city", "Nowhere").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "city": "Nowhere", "list": [] }));
}

#[tokio::test]
async fn missing_city_is_bad_request_without_fetch() {
    let fetcher = StubFetcher::new(Reply::Forecast(uniform_forecast(40)));
    let server = server_with(fetcher.clone());

    let response = server.get("/api/weather").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "city is required" }));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn empty_city_is_bad_request_without_fetch() {
    let fetcher = StubFetcher::new(Reply::Forecast(uniform_forecast(40)));
    let server = server_with(fetcher.clone());

    let response = server.get("/api/weather").add_query_param("city", "").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "city is required" }));
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn undecodable_provider_body_is_internal_error_without_list() {
    let server = server_with(StubFetcher::new(Reply::Garbage));

    let response = server.get("/api/weather").add_query_param("city", "London").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    let error = body["error"].as_str().expect("error message");
    assert!(error.starts_with("failed to parse forecast JSON"));
    assert!(body.get("list").is_none());
}

#[tokio::test]
async fn index_page_is_served() {
    let server = server_with(StubFetcher::new(Reply::Forecast(uniform_forecast(0))));

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("<html"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let server = server_with(StubFetcher::new(Reply::Forecast(uniform_forecast(0))));

    let response = server.get("/static/app.js").await;

    response.assert_status_ok();
    assert!(response.text().contains("/api/weather"));
}

#[tokio::test]
async fn unknown_static_asset_is_not_found() {
    let server = server_with(StubFetcher::new(Reply::Forecast(uniform_forecast(0))));

    let response = server.get("/static/missing.css").await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_city_uses_first_value() {
    let fetcher = StubFetcher::new(Reply::Forecast(uniform_forecast(2)));
    let server = server_with(fetcher.clone());

    let response = server.get("/api/weather?city=London&city=Paris").await;

    response.assert_status_ok();
    let payload: WeatherPayload = response.json();
    assert_eq!(payload.city, "London");
    assert_eq!(payload.list.len(), 2);
    assert_eq!(fetcher.calls(), 1);
    assert_eq!(fetcher.last_location.lock().expect("lock").as_deref(), Some("London"));
}

#[tokio::test]
async fn bare_city_flag_is_bad_request_json() {
    let fetcher = StubFetcher::new(Reply::Forecast(uniform_forecast(2)));
    let server = server_with(fetcher.clone());

    let response = server.get("/api/weather?city").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({ "error": "city is required" }));
    assert_eq!(fetcher.calls(), 0);
}
