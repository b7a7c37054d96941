//! End-to-end tests for the HTTP API, with the upstream provider stubbed
//! out by wiremock and the history store backed by a temp directory.

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};
use tempfile::TempDir;
use weather_core::{Config, HistoryStore, OpenWeatherProvider};
use weather_server::{AppState, create_router};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn forecast_body() -> Value {
    // Four three-hour entries per day across six calendar days.
    let mut list = Vec::new();
    for day in 1..=6 {
        for hour in [0, 9, 15, 21] {
            list.push(json!({
                "dt_txt": format!("2026-09-0{day} {hour:02}:00:00"),
                "main": { "temp": 71.6, "humidity": 65 },
                "weather": [ { "icon": "01d", "description": "clear sky" } ],
                "wind": { "speed": 5.4 }
            }));
        }
    }

    json!({ "city": { "name": "Boston" }, "list": list })
}

async fn mock_geocode(server: &MockServer, city: &str) {
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", city))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "name": city, "lat": 42.36, "lon": -71.06 },
            { "name": city, "lat": 52.97, "lon": -0.02 }
        ])))
        .mount(server)
        .await;
}

async fn mock_forecast(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body()))
        .mount(server)
        .await;
}

fn test_server(upstream: &MockServer, dir: &TempDir) -> TestServer {
    let history = HistoryStore::json_file(dir.path().join("search_history.json"));
    let config = Config {
        api_base_url: upstream.uri(),
        api_key: "test-key".to_string(),
    };
    let provider = Arc::new(OpenWeatherProvider::new(&config));

    TestServer::new(create_router(AppState::new(history, provider))).expect("test server")
}

#[tokio::test]
async fn submit_city_returns_six_samples_and_records_history() {
    let upstream = MockServer::start().await;
    mock_geocode(&upstream, "Boston").await;
    mock_forecast(&upstream).await;

    let dir = TempDir::new().expect("temp dir");
    let server = test_server(&upstream, &dir);

    let res = server.post("/").json(&json!({ "cityName": "Boston" })).await;
    res.assert_status_ok();

    let samples: Vec<Value> = res.json();
    assert_eq!(samples.len(), 6);
    assert_eq!(samples[0]["city"], "Boston");
    assert_eq!(samples[0]["date"], "09/01/2026");
    assert_eq!(samples[0]["tempF"], 72);
    assert_eq!(samples[0]["iconDescription"], "clear sky");
    assert_eq!(samples[1]["date"], "09/02/2026");
    assert_eq!(samples[5]["date"], "09/06/2026");

    let res = server.get("/history").await;
    res.assert_status_ok();

    let cities: Vec<Value> = res.json();
    assert!(cities.iter().any(|city| city["name"] == "Boston"));
}

#[tokio::test]
async fn missing_city_name_is_rejected() {
    let upstream = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");
    let server = test_server(&upstream, &dir);

    let res = server.post("/").json(&json!({})).await;

    res.assert_status(StatusCode::BAD_REQUEST);
    res.assert_json(&json!({ "error": "City name is required" }));
}

#[tokio::test]
async fn repeated_submissions_store_one_history_entry() {
    let upstream = MockServer::start().await;
    mock_geocode(&upstream, "Boston").await;
    mock_geocode(&upstream, "boston").await;
    mock_forecast(&upstream).await;

    let dir = TempDir::new().expect("temp dir");
    let server = test_server(&upstream, &dir);

    server.post("/").json(&json!({ "cityName": "Boston" })).await.assert_status_ok();
    server.post("/").json(&json!({ "cityName": "boston" })).await.assert_status_ok();

    let cities: Vec<Value> = server.get("/history").await.json();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["name"], "Boston");
}

#[tokio::test]
async fn delete_removes_the_history_entry() {
    let upstream = MockServer::start().await;
    mock_geocode(&upstream, "Boston").await;
    mock_forecast(&upstream).await;

    let dir = TempDir::new().expect("temp dir");
    let server = test_server(&upstream, &dir);

    server.post("/").json(&json!({ "cityName": "Boston" })).await.assert_status_ok();

    let cities: Vec<Value> = server.get("/history").await.json();
    let id = cities[0]["id"].as_str().expect("city id").to_string();

    let res = server.delete(&format!("/history/{id}")).await;
    res.assert_status(StatusCode::NO_CONTENT);
    assert!(res.text().is_empty());

    let cities: Vec<Value> = server.get("/history").await.json();
    assert!(cities.iter().all(|city| city["id"] != id.as_str()));
}

#[tokio::test]
async fn delete_unknown_id_succeeds() {
    let upstream = MockServer::start().await;
    let dir = TempDir::new().expect("temp dir");
    let server = test_server(&upstream, &dir);

    let res = server.delete("/history/no-such-id").await;
    res.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn upstream_failure_yields_generic_error_and_keeps_history() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let dir = TempDir::new().expect("temp dir");
    let server = test_server(&upstream, &dir);

    let res = server.post("/").json(&json!({ "cityName": "Boston" })).await;
    res.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    res.assert_json(&json!({ "error": "Failed to fetch weather data" }));

    // The history write happened before the failed lookup and is kept.
    let cities: Vec<Value> = server.get("/history").await.json();
    assert!(cities.iter().any(|city| city["name"] == "Boston"));
}
