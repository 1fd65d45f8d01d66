// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Field-mapping widget core.
//!
//! Two user events drive everything: "use my location" runs the
//! [`LocationMapController`] flow, "save" runs the [`PolygonSaver`]. Draw
//! events from the map keep a single active shape. The widget runs on one
//! logical thread; handlers take `&mut self`, so flows of one widget never
//! interleave.

pub mod capabilities;
pub mod controller;
pub mod error;
pub mod http_backend;
pub mod overlay;
pub mod saver;
pub mod shape;

pub use capabilities::{
    DrawControls, Geolocation, MapFactory, MapOptions, MapView, OutputDisplay, TextOutput,
    WidgetBackend, DEFAULT_ZOOM,
};
pub use controller::LocationMapController;
pub use error::{PositionError, PositionErrorCode, WidgetError};
pub use http_backend::HttpBackend;
pub use overlay::OverlayGroup;
pub use saver::PolygonSaver;
pub use shape::{DrawnShape, Position, ShapeId};

/// The widget with its capabilities wired in.
pub struct MapWidget<G, F: MapFactory, B, D> {
    controller: LocationMapController<G, F>,
    saver: PolygonSaver,
    backend: B,
    display: D,
}

impl<G, F, B, D> MapWidget<G, F, B, D>
where
    G: Geolocation,
    F: MapFactory,
    B: WidgetBackend,
    D: OutputDisplay,
{
    pub fn new(geolocation: G, maps: F, backend: B, display: D) -> Self {
        Self {
            controller: LocationMapController::new(geolocation, maps),
            saver: PolygonSaver::new(),
            backend,
            display,
        }
    }

    /// Location button.
    pub async fn on_location_requested(&mut self) -> Result<Position, WidgetError> {
        self.controller
            .request_location_and_update(&self.backend, &mut self.display)
            .await
    }

    /// Draw-created event from the map.
    pub fn on_draw_created(&mut self, shape: DrawnShape) {
        self.controller.on_draw_created(shape);
    }

    /// Save button.
    pub async fn on_save_requested(&mut self) -> Result<serde_json::Value, WidgetError> {
        self.saver
            .save_polygon(
                &self.backend,
                self.controller.active_shape(),
                &mut self.display,
            )
            .await
    }

    pub fn controller(&self) -> &LocationMapController<G, F> {
        &self.controller
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
