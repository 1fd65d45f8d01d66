// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Forecast models: the Open-Meteo payload we consume and the planting
//! report we return.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Subset of the Open-Meteo forecast response used for planting advice.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenMeteoForecast {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub daily: Option<DailyForecast>,
}

/// Column-oriented daily series, one entry per forecast day.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyForecast {
    pub time: Option<Vec<String>>,
    #[serde(default)]
    pub temperature_2m_max: Vec<f64>,
    #[serde(default)]
    pub temperature_2m_min: Vec<f64>,
    #[serde(default)]
    pub precipitation_sum: Vec<f64>,
}

/// Where the forecast was computed for (Open-Meteo snaps to its grid).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct ForecastLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
}

/// Soil moisture hint derived from daily rainfall.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub enum MoistureIndicator {
    High,
    Low,
}

/// One day of the summarized forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct DailySummary {
    pub date: String,
    pub avg_temp: f64,
    pub max_temp: f64,
    pub min_temp: f64,
    pub total_rainfall_mm: f64,
    pub moisture_indicator: MoistureIndicator,
}

/// Maize planting conditions over the coming week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct MaizeConditions {
    pub temperature_ok: bool,
    pub rain_incoming: bool,
    pub consistent_moisture: bool,
    pub no_extreme_heat: bool,
}

impl MaizeConditions {
    pub fn all_met(&self) -> bool {
        self.temperature_ok
            && self.rain_incoming
            && self.consistent_moisture
            && self.no_extreme_heat
    }
}

/// Aggregates over the next seven days.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct WeekAnalysis {
    pub avg_temp: f64,
    pub total_rainfall_mm: f64,
    pub rainy_days_count: u32,
    pub conditions_met: MaizeConditions,
}

/// Response body of `GET /weather`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "bindings/")
)]
pub struct WeatherReport {
    pub location: ForecastLocation,
    pub crop: String,
    pub daily_summary_next_14_days: Vec<DailySummary>,
    pub next_7_days_analysis: WeekAnalysis,
    pub recommendation: String,
    pub advice: String,
}
