// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The external capabilities the widget drives.
//!
//! A browser binding implements these over the DOM, the Geolocation API
//! and the map library; tests implement them in memory.

use super::error::{PositionError, WidgetError};
use super::shape::{DrawnShape, Position};
use geojson::Feature;

/// Zoom level used when centering on the user.
pub const DEFAULT_ZOOM: u8 = 13;

/// OpenStreetMap tile template.
pub const OSM_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Source of the device position.
#[allow(async_fn_in_trait)]
pub trait Geolocation {
    /// Whether the platform offers geolocation at all.
    fn is_available(&self) -> bool;

    async fn current_position(&self) -> Result<Position, PositionError>;
}

/// A live map instance.
pub trait MapView {
    fn set_view(&mut self, center: Position, zoom: u8);

    fn add_overlay_shape(&mut self, shape: &DrawnShape);

    fn remove_overlay_shape(&mut self, shape: &DrawnShape);
}

/// Creates map instances mounted on the page.
pub trait MapFactory {
    type View: MapView;

    /// Build a map with base tiles, an empty overlay group and draw controls.
    fn create(&self, center: Position, options: &MapOptions) -> Self::View;
}

/// The backend endpoints the widget calls.
#[allow(async_fn_in_trait)]
pub trait WidgetBackend {
    /// `GET /weather`; the body is opaque to the widget.
    async fn fetch_weather(&self, position: Position) -> Result<serde_json::Value, WidgetError>;

    /// `POST /create-polygon`; returns the response body.
    async fn create_polygon(&self, geo_json: &Feature) -> Result<serde_json::Value, WidgetError>;
}

/// The text output region and alert surface.
pub trait OutputDisplay {
    fn set_output(&mut self, text: &str);

    fn append_output(&mut self, text: &str);

    /// Blocking, user-visible notification.
    fn alert(&mut self, message: &str);
}

/// Which drawing tools the map offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawControls {
    pub polygon: bool,
    pub polyline: bool,
    pub rectangle: bool,
    pub circle: bool,
    pub marker: bool,
    pub circle_marker: bool,
    /// Allow editing shapes already in the overlay group.
    pub edit_overlay: bool,
}

impl DrawControls {
    pub fn polygon_only() -> Self {
        Self {
            polygon: true,
            polyline: false,
            rectangle: false,
            circle: false,
            marker: false,
            circle_marker: false,
            edit_overlay: true,
        }
    }
}

/// Everything needed to construct a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub draw: DrawControls,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            tile_url: OSM_TILE_URL.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            draw: DrawControls::polygon_only(),
        }
    }
}

/// In-memory output region, for headless use.
#[derive(Debug, Default, Clone)]
pub struct TextOutput {
    text: String,
    alerts: Vec<String>,
}

impl TextOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl OutputDisplay for TextOutput {
    fn set_output(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn append_output(&mut self, text: &str) {
        self.text.push_str(text);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
