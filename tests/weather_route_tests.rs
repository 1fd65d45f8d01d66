// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for the weather route against a stub Open-Meteo.

use axum::{
    body::Body,
    extract::RawQuery,
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

mod common;

async fn weather_request(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_weather_returns_planting_report() {
    let seen_query = Arc::new(Mutex::new(None));
    let recorder = seen_query.clone();
    let stub = Router::new().route(
        "/v1/forecast",
        get(move |RawQuery(query): RawQuery| {
            let recorder = recorder.clone();
            async move {
                *recorder.lock().unwrap() = query;
                Json(common::forecast_json(14, 33.0, 24.0, 8.0))
            }
        }),
    );
    let upstream = common::spawn_stub(stub).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = weather_request(app, "/weather?latitude=6.5&longitude=3.375").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["crop"], "maize (corn)");
    assert_eq!(json["location"]["elevation"], 41.0);
    assert_eq!(json["daily_summary_next_14_days"].as_array().unwrap().len(), 14);
    assert_eq!(json["next_7_days_analysis"]["rainy_days_count"], 7);
    assert_eq!(
        json["next_7_days_analysis"]["conditions_met"]["temperature_ok"],
        true
    );
    assert!(json["recommendation"]
        .as_str()
        .unwrap()
        .starts_with("PLANT MAIZE NOW"));

    let query = seen_query.lock().unwrap().clone().unwrap();
    assert!(query.contains("latitude=6.5"));
    assert!(query.contains("longitude=3.375"));
    assert!(query.contains("forecast_days=14"));
    assert!(query.contains("timezone=auto"));
}

#[tokio::test]
async fn test_weather_upstream_failure_is_bad_gateway() {
    let stub = Router::new().route(
        "/v1/forecast",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
    );
    let upstream = common::spawn_stub(stub).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = weather_request(app, "/weather?latitude=6.5&longitude=3.375").await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "weather_error");
    assert!(json["details"]
        .as_str()
        .unwrap()
        .contains("upstream exploded"));
}

#[tokio::test]
async fn test_weather_short_forecast_is_server_error() {
    let stub = Router::new().route(
        "/v1/forecast",
        get(|| async { Json(common::forecast_json(5, 30.0, 20.0, 0.0)) }),
    );
    let upstream = common::spawn_stub(stub).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = weather_request(app, "/weather?latitude=6.5&longitude=3.375").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["details"], "Not enough forecast days");
}

#[tokio::test]
async fn test_weather_rejects_out_of_range_latitude() {
    // No upstream call is made, so the default config is fine.
    let (app, _) = common::create_test_app(farmwatch::config::Config::test_default());

    let response = weather_request(app, "/weather?latitude=95&longitude=3.375").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "bad_request");
}

#[tokio::test]
async fn test_weather_requires_both_coordinates() {
    let (app, _) = common::create_test_app(farmwatch::config::Config::test_default());

    let response = weather_request(app, "/weather?latitude=6.5").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_weather_rejects_nan_coordinates() {
    let (app, _) = common::create_test_app(farmwatch::config::Config::test_default());

    let response = weather_request(app.clone(), "/weather?latitude=NaN&longitude=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "bad_request");

    let response = weather_request(app, "/weather?latitude=0&longitude=inf").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
