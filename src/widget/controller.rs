// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Location -> weather -> map coordination.
//!
//! Handles the workflow:
//! 1. Ask the geolocation capability for the current position
//! 2. Fetch weather for it and render the JSON into the output region
//! 3. Create the map on first success, recenter it afterwards
//!
//! Draw events land here too, since the overlay group belongs to the map.

use super::capabilities::{
    Geolocation, MapFactory, MapOptions, MapView, OutputDisplay, WidgetBackend,
};
use super::error::WidgetError;
use super::overlay::OverlayGroup;
use super::shape::{DrawnShape, Position};

/// A created map and the overlay group attached to it.
struct MapState<V> {
    view: V,
    overlay: OverlayGroup,
}

/// Owns the map instance and drives the location flow.
pub struct LocationMapController<G, F: MapFactory> {
    geolocation: G,
    maps: F,
    options: MapOptions,
    map: Option<MapState<F::View>>,
}

impl<G: Geolocation, F: MapFactory> LocationMapController<G, F> {
    pub fn new(geolocation: G, maps: F) -> Self {
        Self::with_options(geolocation, maps, MapOptions::default())
    }

    pub fn with_options(geolocation: G, maps: F, options: MapOptions) -> Self {
        Self {
            geolocation,
            maps,
            options,
            map: None,
        }
    }

    pub fn is_map_initialized(&self) -> bool {
        self.map.is_some()
    }

    pub fn map_view(&self) -> Option<&F::View> {
        self.map.as_ref().map(|m| &m.view)
    }

    pub fn overlay(&self) -> Option<&OverlayGroup> {
        self.map.as_ref().map(|m| &m.overlay)
    }

    /// The shape a save would submit.
    pub fn active_shape(&self) -> Option<&DrawnShape> {
        self.overlay().and_then(OverlayGroup::active)
    }

    /// Locate the user, show the weather there, and center the map on them.
    ///
    /// Every failure is alerted on `display` before being returned. A weather
    /// failure leaves the map untouched.
    pub async fn request_location_and_update<B, D>(
        &mut self,
        backend: &B,
        display: &mut D,
    ) -> Result<Position, WidgetError>
    where
        B: WidgetBackend,
        D: OutputDisplay,
    {
        if !self.geolocation.is_available() {
            tracing::warn!("Geolocation capability unavailable");
            return Err(WidgetError::CapabilityUnavailable.surface(display));
        }

        let position = match self.geolocation.current_position().await {
            Ok(position) => position,
            Err(err) => {
                tracing::warn!(code = ?err.code, message = %err.message, "Position request failed");
                return Err(WidgetError::from(err).surface(display));
            }
        };

        let weather = backend
            .fetch_weather(position)
            .await
            .map_err(|e| e.surface(display))?;
        let rendered = serde_json::to_string_pretty(&weather)
            .map_err(|e| WidgetError::remote(e).surface(display))?;
        display.set_output(&rendered);

        self.show_position(position);
        Ok(position)
    }

    /// Center the map on `position`, creating it on first use.
    fn show_position(&mut self, position: Position) {
        match self.map.as_mut() {
            Some(map) => {
                tracing::debug!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    "Recentering map"
                );
                map.view.set_view(position, self.options.zoom);
            }
            None => {
                tracing::info!(
                    latitude = position.latitude,
                    longitude = position.longitude,
                    zoom = self.options.zoom,
                    "Creating map"
                );
                self.map = Some(MapState {
                    view: self.maps.create(position, &self.options),
                    overlay: OverlayGroup::new(),
                });
            }
        }
    }

    /// Handle a newly drawn shape, replacing any previous one.
    pub fn on_draw_created(&mut self, shape: DrawnShape) {
        let Some(map) = self.map.as_mut() else {
            tracing::warn!(shape_id = shape.id().0, "Shape drawn before map exists, ignoring");
            return;
        };

        let incoming = shape.clone();
        if let Some(evicted) = map.overlay.replace_active_shape(shape) {
            map.view.remove_overlay_shape(&evicted);
        }
        map.view.add_overlay_shape(&incoming);
    }
}
