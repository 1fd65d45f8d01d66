// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use farmwatch::config::Config;
use farmwatch::routes::create_router;
use farmwatch::AppState;
use serde_json::{json, Value};
use std::sync::Arc;

/// Config pointing both upstreams at a stub server.
#[allow(dead_code)]
pub fn stub_config(upstream: &str) -> Config {
    Config {
        open_meteo_url: format!("{}/v1/forecast", upstream),
        agro_api_url: format!("{}/agro/1.0", upstream),
        ..Config::test_default()
    }
}

/// Create a test app from the given config.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::from_config(config));
    (create_router(state.clone()), state)
}

/// Serve `router` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_stub(router: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Stub server has no address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Stub server failed");
    });
    format!("http://{}", addr)
}

/// An Open-Meteo style forecast with constant daily values.
#[allow(dead_code)]
pub fn forecast_json(days: usize, max: f64, min: f64, rain: f64) -> Value {
    let dates: Vec<String> = (0..days).map(|i| format!("2026-05-{:02}", i + 1)).collect();
    json!({
        "latitude": 6.5,
        "longitude": 3.375,
        "elevation": 41.0,
        "daily": {
            "time": dates,
            "temperature_2m_max": vec![max; days],
            "temperature_2m_min": vec![min; days],
            "precipitation_sum": vec![rain; days]
        }
    })
}

/// A small square field near Lagos as a GeoJSON Feature.
#[allow(dead_code)]
pub fn field_feature() -> Value {
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[3.37, 6.5], [3.38, 6.5], [3.38, 6.51], [3.37, 6.51], [3.37, 6.5]]]
        }
    })
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
