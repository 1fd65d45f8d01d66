// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Positions and user-drawn shapes.

use geo::{LineString, Polygon};
use geojson::{Feature, Geometry, JsonObject};

/// A point on the map in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Identity the map layer assigns to a drawn shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId(pub u64);

/// A polygon the user drew on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnShape {
    id: ShapeId,
    vertices: Vec<Position>,
}

impl DrawnShape {
    /// Vertices in drawing order; the ring is closed on export.
    pub fn new(id: ShapeId, vertices: Vec<Position>) -> Self {
        Self { id, vertices }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn vertices(&self) -> &[Position] {
        &self.vertices
    }

    /// The shape as a polygon with x = longitude and y = latitude.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring: LineString<f64> = self
            .vertices
            .iter()
            .map(|p| (p.longitude, p.latitude))
            .collect::<Vec<_>>()
            .into();
        Polygon::new(ring, vec![])
    }

    /// GeoJSON Feature with empty properties, as map libraries export it.
    pub fn to_feature(&self) -> Feature {
        let polygon = self.to_polygon();
        Feature {
            bbox: None,
            geometry: Some(Geometry::new(geojson::Value::from(&polygon))),
            id: None,
            properties: Some(JsonObject::new()),
            foreign_members: None,
        }
    }
}
