// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod crop_health;
pub mod polygon;
pub mod weather;

pub use crop_health::{CropHealthReport, CropHealthResponse, HealthStatus};
pub use polygon::{CreatePolygonRequest, CreatePolygonResponse, FieldBoundary};
pub use weather::{DailySummary, WeatherReport};
