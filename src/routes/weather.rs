// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weather and planting advice route.

use crate::error::{AppError, Result};
use crate::models::WeatherReport;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationError};

/// Weather routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/weather", get(get_weather))
}

#[derive(Debug, Deserialize, Validate)]
struct WeatherQuery {
    #[validate(range(min = -90.0, max = 90.0), custom(function = "validate_finite"))]
    latitude: f64,
    #[validate(range(min = -180.0, max = 180.0), custom(function = "validate_finite"))]
    longitude: f64,
}

/// Range checks compare with NaN as false, so they let it through.
fn validate_finite(value: f64) -> std::result::Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

/// Get a 14-day forecast summary with maize planting advice.
async fn get_weather(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReport>> {
    query
        .validate()
        .map_err(|e| AppError::BadRequest(format!("Invalid coordinates: {}", e)))?;

    tracing::info!(
        latitude = query.latitude,
        longitude = query.longitude,
        "Weather requested"
    );

    let report = state
        .weather_service
        .planting_report(query.latitude, query.longitude)
        .await?;

    Ok(Json(report))
}
