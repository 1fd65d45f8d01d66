// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Satellite imagery and NDVI crop-health models.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// NDVI mean at or above which crops are considered healthy (maize, West Africa).
pub const NDVI_HEALTHY: f64 = 0.55;

/// NDVI mean at or above which crops show only moderate stress.
pub const NDVI_MODERATE: f64 = 0.38;

/// Satellite image search result from Agro Monitoring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SatelliteImage {
    /// Acquisition time (Unix seconds)
    #[serde(default)]
    pub dt: i64,
    #[serde(default)]
    pub stats: ImageStats,
    #[serde(default)]
    pub image: ImageUrls,
}

/// Links to per-index statistics for an image.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageStats {
    pub ndvi: Option<String>,
}

/// Links to rendered image tiles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageUrls {
    pub truecolor: Option<String>,
}

/// NDVI statistics for a polygon.
#[derive(Debug, Clone, Deserialize)]
pub struct NdviStats {
    pub mean: Option<f64>,
}

/// Coarse crop-health classes derived from NDVI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    ModerateStress,
    Poor,
}

impl HealthStatus {
    pub fn from_ndvi(mean: f64) -> Self {
        if mean >= NDVI_HEALTHY {
            HealthStatus::Healthy
        } else if mean >= NDVI_MODERATE {
            HealthStatus::ModerateStress
        } else {
            HealthStatus::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy 🌿",
            HealthStatus::ModerateStress => "Moderate Stress ⚠️",
            HealthStatus::Poor => "Poor Health ❌",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Crops look strong. Keep it up!",
            HealthStatus::ModerateStress => {
                "Some stress detected — check water/nutrients soon."
            }
            HealthStatus::Poor => "Crop struggling — act fast (water, pests, nutrients?).",
        }
    }
}

/// Crop health for a polygon, based on its newest clear image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct CropHealthReport {
    pub polygon_id: String,
    pub ndvi_mean: f64,
    pub health_status: String,
    pub advice: String,
    pub satellite_date: i64,
    pub truecolor_image: String,
}

/// A non-report outcome the client should retry later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct CropHealthNotice {
    pub status: String,
    pub message: String,
    pub tip: String,
}

impl CropHealthNotice {
    pub fn no_image(days_lookback: u32) -> Self {
        Self {
            status: "no_image".to_string(),
            message: format!(
                "No clear satellite images found in the last {} days (common in harmattan/dry season).",
                days_lookback
            ),
            tip: "Try again in 3–7 days or draw polygon over greener area.".to_string(),
        }
    }

    pub fn timeout() -> Self {
        Self {
            status: "timeout".to_string(),
            message: "Agro API is taking too long to respond (common during harmattan season or server load).".to_string(),
            tip: "Try again in 10–30 minutes or tomorrow. No data lost — your polygon ID is still valid.".to_string(),
        }
    }
}

/// Response body of `GET /crop-health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CropHealthResponse {
    Report(CropHealthReport),
    Notice(CropHealthNotice),
}
