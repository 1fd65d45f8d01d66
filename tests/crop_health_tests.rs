// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Integration tests for crop health against a stub Agro API.

use axum::{
    body::Body,
    extract::{Path, RawQuery},
    http::{Request, StatusCode},
    routing::get,
    Json, Router,
};
use farmwatch::config::Config;
use farmwatch::routes::create_router;
use farmwatch::services::{AgroClient, AgroTimeouts, CropHealthService, WeatherService};
use farmwatch::AppState;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

mod common;

async fn get_crop_health(app: axum::Router, uri: &str) -> axum::response::Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Stub serving a fixed image list and NDVI stats with the given mean.
/// The stats handler waits `stats_delay` before answering.
async fn imagery_stub(
    images: impl Fn(&str) -> Value + Clone + Send + Sync + 'static,
    mean: Option<f64>,
    stats_delay: Duration,
) -> (String, Arc<Mutex<Vec<String>>>) {
    let stats_queries = Arc::new(Mutex::new(Vec::new()));
    let recorder = stats_queries.clone();
    let base = Arc::new(Mutex::new(String::new()));
    let base_for_search = base.clone();

    let stub = Router::new()
        .route(
            "/agro/1.0/image/search",
            get(move || {
                let base = base_for_search.lock().unwrap().clone();
                let images = images.clone();
                async move { Json(images(&base)) }
            }),
        )
        .route(
            "/stats/{image}",
            get(move |Path(image): Path<String>, RawQuery(query): RawQuery| {
                let recorder = recorder.clone();
                async move {
                    tokio::time::sleep(stats_delay).await;
                    recorder
                        .lock()
                        .unwrap()
                        .push(format!("{}?{}", image, query.unwrap_or_default()));
                    Json(json!({ "mean": mean, "std": 0.1 }))
                }
            }),
        );

    let url = common::spawn_stub(stub).await;
    *base.lock().unwrap() = url.clone();
    (url, stats_queries)
}

fn two_images(base: &str) -> Value {
    json!([
        {
            "dt": 1_700_000_000,
            "stats": { "ndvi": format!("{}/stats/older", base) },
            "image": { "truecolor": "http://img/older.png" }
        },
        {
            "dt": 1_700_500_000,
            "stats": { "ndvi": format!("{}/stats/newer", base) },
            "image": { "truecolor": "http://img/newer.png" }
        }
    ])
}

#[tokio::test]
async fn test_crop_health_uses_newest_image() {
    let (upstream, stats_queries) = imagery_stub(two_images, Some(0.61234), Duration::ZERO).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = get_crop_health(app, "/crop-health?poly_id=5f1a2b").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["polygon_id"], "5f1a2b");
    assert_eq!(json["ndvi_mean"], 0.612);
    assert_eq!(json["health_status"], "Healthy 🌿");
    assert_eq!(json["satellite_date"], 1_700_500_000);
    assert_eq!(json["truecolor_image"], "http://img/newer.png");

    // The stats link had no query string, so the key was appended.
    let queries = stats_queries.lock().unwrap();
    assert_eq!(*queries, vec!["newer?appid=test_agro_key".to_string()]);
}

#[tokio::test]
async fn test_crop_health_moderate_stress() {
    let (upstream, _) = imagery_stub(two_images, Some(0.4), Duration::ZERO).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = get_crop_health(app, "/crop-health?poly_id=5f1a2b&days_lookback=10").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["health_status"], "Moderate Stress ⚠️");
}

#[tokio::test]
async fn test_crop_health_without_images() {
    let (upstream, stats_queries) = imagery_stub(|_| json!([]), Some(0.7), Duration::ZERO).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = get_crop_health(app, "/crop-health?poly_id=5f1a2b").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "no_image");
    assert!(json["message"].as_str().unwrap().contains("last 30 days"));
    assert!(stats_queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_crop_health_missing_mean_is_server_error() {
    let (upstream, _) = imagery_stub(two_images, None, Duration::ZERO).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = get_crop_health(app, "/crop-health?poly_id=5f1a2b").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["details"], "No NDVI mean value available");
}

#[tokio::test]
async fn test_crop_health_newest_image_without_stats_is_server_error() {
    // Only the older image carries an NDVI link; the newest one must be used anyway.
    let images = |base: &str| {
        json!([
            {
                "dt": 1_700_000_000,
                "stats": { "ndvi": format!("{}/stats/older", base) }
            },
            {
                "dt": 1_700_500_000,
                "stats": {},
                "image": { "truecolor": "http://img/newer.png" }
            }
        ])
    };
    let (upstream, stats_queries) = imagery_stub(images, Some(0.7), Duration::ZERO).await;
    let (app, _) = common::create_test_app(common::stub_config(&upstream));

    let response = get_crop_health(app, "/crop-health?poly_id=5f1a2b").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = common::body_json(response).await;
    assert_eq!(json["error"], "upstream_data_error");
    assert_eq!(json["details"], "No NDVI stats URL found in image data");
    assert!(stats_queries.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_crop_health_timeout_is_reported_as_notice() {
    let (upstream, _) = imagery_stub(two_images, Some(0.7), Duration::from_secs(2)).await;

    let config = common::stub_config(&upstream);
    let agro_client = AgroClient::with_timeouts(
        config.agro_api_url.clone(),
        config.agro_api_key.clone(),
        AgroTimeouts {
            ndvi_stats: Duration::from_millis(100),
            ..AgroTimeouts::default()
        },
    );
    let state = Arc::new(AppState {
        weather_service: WeatherService::new(config.open_meteo_url.clone()),
        crop_health_service: CropHealthService::new(agro_client.clone()),
        agro_client,
        config,
    });
    let app = create_router(state);

    let response = get_crop_health(app, "/crop-health?poly_id=5f1a2b").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = common::body_json(response).await;
    assert_eq!(json["status"], "timeout");
}

#[tokio::test]
async fn test_crop_health_validates_query() {
    let (app, _) = common::create_test_app(Config::test_default());

    let response = get_crop_health(app.clone(), "/crop-health").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = get_crop_health(app, "/crop-health?poly_id=abc&days_lookback=0").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
