// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field boundary model and geometry validation.

use geo::{Area, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Request body of `POST /create-polygon`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePolygonRequest {
    pub geo_json: Option<serde_json::Value>,
}

/// Response body of `POST /create-polygon`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct CreatePolygonResponse {
    pub poly_id: String,
    pub message: String,
}

/// Field geometry - either a simple polygon or multi-polygon.
#[derive(Debug, Clone)]
pub enum FieldGeometry {
    Polygon(Polygon<f64>),
    MultiPolygon(MultiPolygon<f64>),
}

impl FieldGeometry {
    /// Planar area in squared degrees. Only meaningful as a degeneracy check.
    pub fn planar_area(&self) -> f64 {
        match self {
            FieldGeometry::Polygon(p) => p.unsigned_area(),
            FieldGeometry::MultiPolygon(mp) => mp.unsigned_area(),
        }
    }
}

/// A validated field boundary drawn by the user.
///
/// Keeps the submitted feature so it can be forwarded verbatim.
#[derive(Debug, Clone)]
pub struct FieldBoundary {
    pub feature: Feature,
    pub geometry: FieldGeometry,
}

impl FieldBoundary {
    /// Validate a submitted `geo_json` value.
    ///
    /// It must be a GeoJSON Feature carrying a Polygon or MultiPolygon
    /// with non-zero area.
    pub fn from_value(value: serde_json::Value) -> Result<Self, BoundaryError> {
        let geojson = GeoJson::from_json_value(value)
            .map_err(|e| BoundaryError::NotGeoJson(e.to_string()))?;

        let GeoJson::Feature(feature) = geojson else {
            return Err(BoundaryError::NotAFeature);
        };

        let geometry = feature
            .geometry
            .as_ref()
            .ok_or(BoundaryError::MissingGeometry)?;
        let geometry = Self::convert_geometry(geometry.value.clone())?;

        if geometry.planar_area() <= 0.0 {
            return Err(BoundaryError::ZeroArea);
        }

        Ok(Self { feature, geometry })
    }

    fn convert_geometry(value: geojson::Value) -> Result<FieldGeometry, BoundaryError> {
        match value {
            geojson::Value::Polygon(_) => Polygon::<f64>::try_from(value)
                .map(FieldGeometry::Polygon)
                .map_err(|e| BoundaryError::NotGeoJson(e.to_string())),
            geojson::Value::MultiPolygon(_) => MultiPolygon::<f64>::try_from(value)
                .map(FieldGeometry::MultiPolygon)
                .map_err(|e| BoundaryError::NotGeoJson(e.to_string())),
            _ => Err(BoundaryError::UnsupportedGeometry),
        }
    }
}

/// Payload sent to the Agro Monitoring polygon endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AgroPolygonRequest {
    pub name: String,
    pub geo_json: Feature,
}

/// The parts of Agro's polygon record we read back.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgroPolygonCreated {
    #[serde(rename = "_id")]
    pub mongo_id: Option<String>,
    pub id: Option<String>,
}

impl AgroPolygonCreated {
    /// Agro documents `id`; some deployments answer with `_id` instead.
    pub fn polygon_id(&self) -> Option<&str> {
        self.mongo_id
            .as_deref()
            .or(self.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Errors from boundary validation.
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("Invalid GeoJSON: {0}")]
    NotGeoJson(String),

    #[error("Invalid GeoJSON: must be Feature with geometry")]
    NotAFeature,

    #[error("Invalid GeoJSON: must be Feature with geometry")]
    MissingGeometry,

    #[error("Unsupported geometry type (expected Polygon or MultiPolygon)")]
    UnsupportedGeometry,

    #[error("Polygon has zero area")]
    ZeroArea,
}
