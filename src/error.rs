// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Weather API error: {0}")]
    WeatherApi(String),

    /// Agro Monitoring rejected a call; its status code is passed through.
    #[error("Agro API failed: {message}")]
    AgroApi { status: StatusCode, message: String },

    /// An upstream answered successfully but the payload is unusable.
    #[error("Unexpected upstream data: {0}")]
    UpstreamData(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Maximum number of upstream body characters echoed back to clients.
    pub const UPSTREAM_DETAIL_LIMIT: usize = 200;

    /// Build an Agro error from a raw status code, clamping invalid codes to 502.
    pub fn agro(status: u16, message: impl Into<String>) -> Self {
        AppError::AgroApi {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
            message: message.into(),
        }
    }

    /// Truncate an upstream response body for inclusion in an error message.
    pub fn truncate_detail(body: &str, limit: usize) -> String {
        body.chars().take(limit).collect()
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::WeatherApi(msg) => {
                tracing::warn!(error = %msg, "Weather API error");
                (StatusCode::BAD_GATEWAY, "weather_error", Some(msg.clone()))
            }
            AppError::AgroApi { status, message } => {
                tracing::warn!(status = status.as_u16(), error = %message, "Agro API error");
                (*status, "agro_error", Some(message.clone()))
            }
            AppError::UpstreamData(msg) => {
                tracing::error!(error = %msg, "Unusable upstream payload");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "upstream_data_error",
                    Some(msg.clone()),
                )
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
