// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persisting the drawn field.

use super::capabilities::{OutputDisplay, WidgetBackend};
use super::error::WidgetError;
use super::shape::DrawnShape;
use serde_json::Value;

/// Submits the active shape to the backend.
#[derive(Debug, Default, Clone, Copy)]
pub struct PolygonSaver;

impl PolygonSaver {
    pub fn new() -> Self {
        Self
    }

    /// Save `shape` and append the returned polygon ID to the output.
    ///
    /// Returns the ID as the backend sent it.
    pub async fn save_polygon<B, D>(
        &self,
        backend: &B,
        shape: Option<&DrawnShape>,
        display: &mut D,
    ) -> Result<Value, WidgetError>
    where
        B: WidgetBackend,
        D: OutputDisplay,
    {
        let Some(shape) = shape else {
            return Err(WidgetError::NoShapeDrawn.surface(display));
        };

        let feature = shape.to_feature();
        let response = backend
            .create_polygon(&feature)
            .await
            .map_err(|e| e.surface(display))?;

        let poly_id = match response.get("poly_id") {
            Some(id) if !id.is_null() => id.clone(),
            _ => {
                return Err(WidgetError::remote("response has no poly_id").surface(display));
            }
        };

        tracing::info!(poly_id = %poly_id, shape_id = shape.id().0, "Polygon saved");
        display.append_output(&format!("\nPolygon saved! ID: {}", display_id(&poly_id)));
        Ok(poly_id)
    }
}

/// Strings are shown without their JSON quotes.
fn display_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
