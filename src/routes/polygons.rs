// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field polygon registration route.

use crate::error::{AppError, Result};
use crate::models::{CreatePolygonRequest, CreatePolygonResponse, FieldBoundary};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Polygon routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/create-polygon", post(create_polygon))
}

/// Name given to polygons registered from the widget.
pub fn polygon_name(now: DateTime<Utc>) -> String {
    format!("Farm from App - {}", now.format("%Y-%m-%d %H:%M"))
}

/// Validate a drawn field and register it with Agro Monitoring.
async fn create_polygon(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePolygonRequest>,
) -> Result<Json<CreatePolygonResponse>> {
    let geo_json = payload.geo_json.ok_or_else(|| {
        AppError::BadRequest("Invalid GeoJSON: must be Feature with geometry".to_string())
    })?;

    let boundary =
        FieldBoundary::from_value(geo_json).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let poly_id = state
        .agro_client
        .create_polygon(&boundary, &polygon_name(Utc::now()))
        .await?;

    Ok(Json(CreatePolygonResponse {
        poly_id,
        message: "Polygon created successfully".to_string(),
    }))
}
