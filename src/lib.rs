// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Farmwatch: map a field, check the weather, watch the crop.
//!
//! This crate provides the field-mapping widget core (location, weather,
//! single-polygon drawing and saving) and the backend API it talks to.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod widget;

use config::Config;
use services::{AgroClient, CropHealthService, WeatherService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub weather_service: WeatherService,
    pub agro_client: AgroClient,
    pub crop_health_service: CropHealthService,
}

impl AppState {
    /// Build the state and its upstream clients from configuration.
    pub fn from_config(config: Config) -> Self {
        let weather_service = WeatherService::new(config.open_meteo_url.clone());
        let agro_client = AgroClient::new(config.agro_api_url.clone(), config.agro_api_key.clone());
        let crop_health_service = CropHealthService::new(agro_client.clone());

        Self {
            config,
            weather_service,
            agro_client,
            crop_health_service,
        }
    }
}
