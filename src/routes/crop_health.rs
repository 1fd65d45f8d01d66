// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Crop health route.

use crate::error::{AppError, Result};
use crate::models::CropHealthResponse;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

/// Crop health routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/crop-health", get(get_crop_health))
}

#[derive(Debug, Deserialize, Validate)]
struct CropHealthQuery {
    #[validate(length(min = 1, max = 64))]
    poly_id: String,
    #[serde(default = "default_days_lookback")]
    #[validate(range(min = 1, max = 365))]
    days_lookback: u32,
}

fn default_days_lookback() -> u32 {
    30
}

/// Classify crop health from the newest clear satellite image.
async fn get_crop_health(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CropHealthQuery>,
) -> Result<Json<CropHealthResponse>> {
    query
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let response = state
        .crop_health_service
        .assess(&query.poly_id, query.days_lookback, chrono::Utc::now())
        .await?;

    Ok(Json(response))
}
