// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The field-mapping page served to browsers.
//!
//! The page is bundled into the binary so the server has no filesystem
//! dependencies at runtime.

use crate::AppState;
use axum::{response::Html, response::IntoResponse, routing::get, Router};
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// CSP for the page: map assets from unpkg, tiles from OpenStreetMap, API calls same-origin.
pub const PAGE_CSP: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline' https://unpkg.com; \
    style-src 'self' 'unsafe-inline' https://unpkg.com; \
    img-src 'self' data: https://unpkg.com https://tile.openstreetmap.org; \
    connect-src 'self'; \
    frame-ancestors 'none'";

/// The page needs geolocation; everything else stays off.
pub const PAGE_PERMISSIONS_POLICY: &str = "accelerometer=(), camera=(), geolocation=(self), gyroscope=(), magnetometer=(), microphone=(), payment=(), usb=()";

/// Page routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(index))
}

async fn index() -> impl IntoResponse {
    (
        [
            ("content-security-policy", PAGE_CSP),
            ("permissions-policy", PAGE_PERMISSIONS_POLICY),
        ],
        Html(INDEX_HTML),
    )
}
