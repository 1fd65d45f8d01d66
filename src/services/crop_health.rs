// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Crop health assessment from satellite NDVI.
//!
//! Handles the workflow:
//! 1. Search clear images for the polygon over the lookback window
//! 2. Pick the newest image and fetch its NDVI statistics
//! 3. Classify the NDVI mean into a health status

use crate::error::AppError;
use crate::models::crop_health::{
    CropHealthNotice, CropHealthReport, CropHealthResponse, HealthStatus,
};
use crate::services::agro::{AgroClient, AgroRequestError};
use chrono::{DateTime, Utc};

const SECONDS_PER_DAY: i64 = 86_400;

/// Assess crop health for registered polygons.
#[derive(Clone)]
pub struct CropHealthService {
    agro: AgroClient,
}

impl CropHealthService {
    pub fn new(agro: AgroClient) -> Self {
        Self { agro }
    }

    /// Assess a polygon using imagery from the last `days_lookback` days.
    ///
    /// Upstream timeouts are reported as a retry notice rather than an error.
    pub async fn assess(
        &self,
        poly_id: &str,
        days_lookback: u32,
        now: DateTime<Utc>,
    ) -> Result<CropHealthResponse, AppError> {
        match self.assess_inner(poly_id, days_lookback, now).await {
            Ok(response) => Ok(response),
            Err(AgroRequestError::Timeout) => {
                tracing::warn!(poly_id, "Agro API timed out during crop health check");
                Ok(CropHealthResponse::Notice(CropHealthNotice::timeout()))
            }
            Err(AgroRequestError::App(err)) => Err(err),
        }
    }

    async fn assess_inner(
        &self,
        poly_id: &str,
        days_lookback: u32,
        now: DateTime<Utc>,
    ) -> Result<CropHealthResponse, AgroRequestError> {
        let end = now.timestamp();
        let start = end - i64::from(days_lookback) * SECONDS_PER_DAY;

        let images = self.agro.search_images(poly_id, start, end).await?;

        let Some(latest) = images.into_iter().max_by_key(|image| image.dt) else {
            tracing::info!(poly_id, days_lookback, "No clear imagery for polygon");
            return Ok(CropHealthResponse::Notice(CropHealthNotice::no_image(
                days_lookback,
            )));
        };

        let stats_url = latest.stats.ndvi.as_deref().ok_or_else(|| {
            AppError::UpstreamData("No NDVI stats URL found in image data".to_string())
        })?;

        let stats = self.agro.ndvi_stats(stats_url).await?;
        let mean = stats
            .mean
            .ok_or_else(|| AppError::UpstreamData("No NDVI mean value available".to_string()))?;

        let status = HealthStatus::from_ndvi(mean);
        tracing::info!(
            poly_id,
            ndvi_mean = mean,
            satellite_date = latest.dt,
            status = ?status,
            "Assessed crop health"
        );

        Ok(CropHealthResponse::Report(CropHealthReport {
            polygon_id: poly_id.to_string(),
            ndvi_mean: (mean * 1000.0).round() / 1000.0,
            health_status: status.label().to_string(),
            advice: status.advice().to_string(),
            satellite_date: latest.dt,
            truecolor_image: latest
                .image
                .truecolor
                .unwrap_or_else(|| "N/A".to_string()),
        }))
    }
}
