// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Agro Monitoring API client.
//!
//! Handles:
//! - Registering field polygons
//! - Searching satellite imagery for a polygon
//! - Fetching NDVI statistics for an image

use crate::error::AppError;
use crate::models::crop_health::{NdviStats, SatelliteImage};
use crate::models::polygon::{AgroPolygonCreated, AgroPolygonRequest, FieldBoundary};
use std::time::Duration;

/// Maximum cloud coverage (percent) accepted for imagery.
pub const MAX_CLOUD_PERCENT: u32 = 20;

/// Per-call timeouts for Agro requests.
#[derive(Debug, Clone, Copy)]
pub struct AgroTimeouts {
    pub create_polygon: Duration,
    pub image_search: Duration,
    /// Stats are computed on demand upstream and are the slow call.
    pub ndvi_stats: Duration,
}

impl Default for AgroTimeouts {
    fn default() -> Self {
        Self {
            create_polygon: Duration::from_secs(20),
            image_search: Duration::from_secs(40),
            ndvi_stats: Duration::from_secs(90),
        }
    }
}

/// Agro Monitoring API client.
#[derive(Clone)]
pub struct AgroClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeouts: AgroTimeouts,
}

impl AgroClient {
    /// Create a new client with the default timeouts.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::with_timeouts(base_url, api_key, AgroTimeouts::default())
    }

    pub fn with_timeouts(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeouts: AgroTimeouts,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            timeouts,
        }
    }

    /// Register a field boundary and return Agro's polygon ID.
    pub async fn create_polygon(
        &self,
        boundary: &FieldBoundary,
        name: &str,
    ) -> Result<String, AppError> {
        let url = format!("{}/polygons", self.base_url);
        let body = AgroPolygonRequest {
            name: name.to_string(),
            geo_json: boundary.feature.clone(),
        };

        let response = self
            .http
            .post(&url)
            .query(&[("appid", self.api_key.as_str())])
            .json(&body)
            .timeout(self.timeouts.create_polygon)
            .send()
            .await
            .map_err(|e| AppError::agro(502, format!("Polygon request failed: {}", e)))?;

        let status = response.status().as_u16();
        if status != 200 && status != 201 {
            let body = response.text().await.unwrap_or_default();
            let detail = if body.is_empty() {
                "Unknown error".to_string()
            } else {
                AppError::truncate_detail(&body, AppError::UPSTREAM_DETAIL_LIMIT)
            };
            return Err(AppError::agro(status, detail));
        }

        let created: AgroPolygonCreated = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamData(format!("JSON parse error: {}", e)))?;

        let poly_id = created
            .polygon_id()
            .ok_or_else(|| AppError::UpstreamData("No _id returned from Agro API".to_string()))?;

        tracing::info!(poly_id, name, "Registered field polygon");
        Ok(poly_id.to_string())
    }

    /// Search images for a polygon acquired in `[start, end]` (Unix seconds).
    pub async fn search_images(
        &self,
        poly_id: &str,
        start: i64,
        end: i64,
    ) -> Result<Vec<SatelliteImage>, AgroRequestError> {
        let url = format!("{}/image/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("appid", self.api_key.clone()),
                ("polyid", poly_id.to_string()),
                ("start", start.to_string()),
                ("end", end.to_string()),
                ("clouds_max", MAX_CLOUD_PERCENT.to_string()),
            ])
            .timeout(self.timeouts.image_search)
            .send()
            .await?;

        Self::check_response_json(response, "Search failed").await
    }

    /// Fetch NDVI statistics from the URL Agro attached to an image.
    pub async fn ndvi_stats(&self, stats_url: &str) -> Result<NdviStats, AgroRequestError> {
        let url = self.with_app_id(stats_url);

        let response = self
            .http
            .get(&url)
            .timeout(self.timeouts.ndvi_stats)
            .send()
            .await?;

        Self::check_response_json(response, "NDVI stats failed").await
    }

    /// Stats links normally embed the key already; add it when they don't.
    fn with_app_id(&self, url: &str) -> String {
        if url.contains('?') {
            url.to_string()
        } else {
            format!("{}?appid={}", url, urlencoding::encode(&self.api_key))
        }
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> serde::Deserialize<'de>>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, AgroRequestError> {
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgroRequestError::App(AppError::agro(
                502,
                format!("{}: {}", context, AppError::truncate_detail(&body, 150)),
            )));
        }

        response.json().await.map_err(AgroRequestError::from)
    }
}

/// Failure of an imagery request, keeping timeouts distinguishable.
#[derive(Debug, thiserror::Error)]
pub enum AgroRequestError {
    #[error("Agro API timed out")]
    Timeout,

    #[error(transparent)]
    App(#[from] AppError),
}

impl From<reqwest::Error> for AgroRequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AgroRequestError::Timeout
        } else if err.is_decode() {
            AgroRequestError::App(AppError::UpstreamData(format!("JSON parse error: {}", err)))
        } else {
            AgroRequestError::App(AppError::agro(502, err.to_string()))
        }
    }
}
