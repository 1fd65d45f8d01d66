// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `WidgetBackend` over HTTP.

use super::capabilities::WidgetBackend;
use super::error::WidgetError;
use super::shape::Position;
use geojson::Feature;
use serde_json::Value;

/// Talks to a farmwatch server.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// `base_url` is the server origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json(response: reqwest::Response) -> Result<Value, WidgetError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WidgetError::RemoteRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| WidgetError::remote(format!("JSON parse error: {}", e)))
    }
}

impl WidgetBackend for HttpBackend {
    async fn fetch_weather(&self, position: Position) -> Result<Value, WidgetError> {
        let url = format!("{}/weather", self.base_url);

        // `f64::to_string` gives the shortest form, so 40.0 is sent as "40".
        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", position.latitude.to_string()),
                ("longitude", position.longitude.to_string()),
            ])
            .send()
            .await
            .map_err(WidgetError::remote)?;

        Self::check_response_json(response).await
    }

    async fn create_polygon(&self, geo_json: &Feature) -> Result<Value, WidgetError> {
        let url = format!("{}/create-polygon", self.base_url);

        let body = serde_json::json!({
            "geo_json": geo_json
        });

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(WidgetError::remote)?;

        Self::check_response_json(response).await
    }
}
