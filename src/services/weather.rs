// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Open-Meteo forecast client and maize planting analysis.
//!
//! Handles:
//! - Fetching a 14-day forecast for a coordinate
//! - Summarizing each day (average temperature, rainfall, moisture)
//! - Checking the next week against maize planting conditions

use crate::error::AppError;
use crate::models::weather::{
    DailySummary, ForecastLocation, MaizeConditions, MoistureIndicator, OpenMeteoForecast,
    WeatherReport, WeekAnalysis,
};

/// Days requested from Open-Meteo.
const FORECAST_DAYS: u32 = 14;

/// Days the planting analysis looks ahead.
const ANALYSIS_DAYS: usize = 7;

/// Daily rainfall above which soil moisture is reported as high (mm).
const HIGH_MOISTURE_MM: f64 = 5.0;

/// Daily rainfall counted as a rainy day (mm).
const RAINY_DAY_MM: f64 = 5.0;

/// Upstream body characters echoed in weather errors.
const WEATHER_DETAIL_LIMIT: usize = 150;

/// Open-Meteo forecast client.
#[derive(Clone)]
pub struct WeatherService {
    http: reqwest::Client,
    forecast_url: String,
}

impl WeatherService {
    /// Create a client for the given forecast endpoint.
    pub fn new(forecast_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            forecast_url: forecast_url.into(),
        }
    }

    /// Fetch the forecast for a coordinate and turn it into planting advice.
    pub async fn planting_report(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherReport, AppError> {
        let forecast = self.fetch_forecast(latitude, longitude).await?;
        summarize_forecast(&forecast)
    }

    /// Fetch the raw forecast.
    pub async fn fetch_forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<OpenMeteoForecast, AppError> {
        let response = self
            .http
            .get(&self.forecast_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m,wind_speed_10m".to_string()),
                (
                    "hourly",
                    "temperature_2m,relative_humidity_2m,precipitation_probability".to_string(),
                ),
                (
                    "daily",
                    "temperature_2m_max,temperature_2m_min,precipitation_sum".to_string(),
                ),
                ("timezone", "auto".to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherApi(format!("Failed to fetch weather: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Open-Meteo request failed");
            return Err(AppError::WeatherApi(format!(
                "Failed to fetch weather: {}",
                AppError::truncate_detail(&body, WEATHER_DETAIL_LIMIT)
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::WeatherApi(format!("JSON parse error: {}", e)))
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Summarize a forecast into a maize planting report.
pub fn summarize_forecast(forecast: &OpenMeteoForecast) -> Result<WeatherReport, AppError> {
    let daily = forecast
        .daily
        .as_ref()
        .filter(|d| d.time.is_some())
        .ok_or_else(|| AppError::UpstreamData("No valid daily data returned".to_string()))?;
    let dates = daily.time.as_deref().unwrap_or_default();

    let mut daily_summary = Vec::with_capacity(dates.len());
    for (i, date) in dates.iter().enumerate() {
        let (Some(&max), Some(&min), Some(&rain)) = (
            daily.temperature_2m_max.get(i),
            daily.temperature_2m_min.get(i),
            daily.precipitation_sum.get(i),
        ) else {
            return Err(AppError::UpstreamData(format!(
                "Daily series truncated at {}",
                date
            )));
        };

        daily_summary.push(DailySummary {
            date: date.clone(),
            avg_temp: round2((max + min) / 2.0),
            max_temp: round2(max),
            min_temp: round2(min),
            total_rainfall_mm: round2(rain),
            moisture_indicator: if rain > HIGH_MOISTURE_MM {
                MoistureIndicator::High
            } else {
                MoistureIndicator::Low
            },
        });
    }

    if daily_summary.len() < ANALYSIS_DAYS {
        return Err(AppError::UpstreamData(
            "Not enough forecast days".to_string(),
        ));
    }

    let week = &daily_summary[..ANALYSIS_DAYS];
    let total_rainfall: f64 = week.iter().map(|d| d.total_rainfall_mm).sum();
    let analysis = analyze_week(week, total_rainfall);
    let (recommendation, advice) = recommend(&analysis.conditions_met, total_rainfall);

    tracing::debug!(
        latitude = forecast.latitude,
        longitude = forecast.longitude,
        total_rainfall_mm = analysis.total_rainfall_mm,
        plant_now = analysis.conditions_met.all_met(),
        "Summarized forecast"
    );

    Ok(WeatherReport {
        location: ForecastLocation {
            latitude: forecast.latitude,
            longitude: forecast.longitude,
            elevation: forecast.elevation,
        },
        crop: "maize (corn)".to_string(),
        daily_summary_next_14_days: daily_summary,
        next_7_days_analysis: analysis,
        recommendation,
        advice,
    })
}

/// Aggregate a week of daily summaries against maize planting conditions.
fn analyze_week(week: &[DailySummary], total_rainfall: f64) -> WeekAnalysis {
    let days = week.len() as f64;
    let avg_temp = week.iter().map(|d| d.avg_temp).sum::<f64>() / days;
    let rainy_days = week
        .iter()
        .filter(|d| d.total_rainfall_mm >= RAINY_DAY_MM)
        .count() as u32;

    WeekAnalysis {
        avg_temp: round2(avg_temp),
        total_rainfall_mm: round2(total_rainfall),
        rainy_days_count: rainy_days,
        conditions_met: MaizeConditions {
            temperature_ok: (25.0..=32.0).contains(&avg_temp),
            rain_incoming: total_rainfall >= 30.0,
            consistent_moisture: rainy_days >= 3,
            no_extreme_heat: week.iter().all(|d| d.max_temp <= 35.0),
        },
    }
}

/// `total_rainfall` is the unrounded weekly sum.
fn recommend(conditions: &MaizeConditions, total_rainfall: f64) -> (String, String) {
    if conditions.all_met() {
        (
            "PLANT MAIZE NOW 🌽 Optimal window ahead!".to_string(),
            "Rains starting soon + perfect temps. Prepare land!".to_string(),
        )
    } else if total_rainfall >= 15.0 {
        (
            "PREPARE TO PLANT SOON ⏳".to_string(),
            "Some rain coming – good if you have irrigation backup.".to_string(),
        )
    } else {
        (
            "WAIT FOR RAINY SEASON ⏳ (March–June best)".to_string(),
            format!(
                "Dry forecast ({}mm next week). Risk of poor germination without irrigation.",
                total_rainfall
            ),
        )
    }
}
