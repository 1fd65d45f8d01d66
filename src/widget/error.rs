// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Errors surfaced to the user by the widget.

use super::capabilities::OutputDisplay;

/// User-visible widget failure. The `Display` text is the alert message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WidgetError {
    #[error("Geolocation is not supported by this browser.")]
    CapabilityUnavailable,

    #[error("Unable to retrieve your location: {0}")]
    LocationUnavailable(String),

    #[error("Please draw a polygon first!")]
    NoShapeDrawn,

    #[error("Request failed: {0}")]
    RemoteRequestFailed(String),
}

impl WidgetError {
    pub fn remote(err: impl std::fmt::Display) -> Self {
        WidgetError::RemoteRequestFailed(err.to_string())
    }

    /// Show the error as an alert and hand it back for propagation.
    pub fn surface<D: OutputDisplay>(self, display: &mut D) -> Self {
        display.alert(&self.to_string());
        self
    }
}

/// Why the geolocation capability could not produce a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionErrorCode {
    PermissionDenied = 1,
    PositionUnavailable = 2,
    Timeout = 3,
}

/// Failure reported by the geolocation capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionError {
    pub code: PositionErrorCode,
    /// Human-readable message from the platform.
    pub message: String,
}

impl PositionError {
    pub fn new(code: PositionErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<PositionError> for WidgetError {
    fn from(err: PositionError) -> Self {
        WidgetError::LocationUnavailable(err.message)
    }
}
