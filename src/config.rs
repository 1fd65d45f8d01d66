// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local development.

use std::env;

/// Default Open-Meteo forecast endpoint.
pub const DEFAULT_OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Default Agro Monitoring API base URL.
pub const DEFAULT_AGRO_API_URL: &str = "https://api.agromonitoring.com/agro/1.0";

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Origin allowed by CORS in addition to localhost
    pub frontend_url: String,
    /// Open-Meteo forecast endpoint
    pub open_meteo_url: String,
    /// Agro Monitoring API base URL (without trailing slash)
    pub agro_api_url: String,
    /// Agro Monitoring API key
    pub agro_api_key: String,
}

impl Config {
    /// Config for tests, pointing both upstreams at unroutable defaults.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:8080".to_string(),
            open_meteo_url: DEFAULT_OPEN_METEO_URL.to_string(),
            agro_api_url: DEFAULT_AGRO_API_URL.to_string(),
            agro_api_key: "test_agro_key".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            open_meteo_url: env::var("OPEN_METEO_URL")
                .unwrap_or_else(|_| DEFAULT_OPEN_METEO_URL.to_string()),
            agro_api_url: env::var("AGRO_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_AGRO_API_URL.to_string()),
            agro_api_key: env::var("AGRO_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("AGRO_API_KEY"))?,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test touching the environment so parallel tests cannot race on it.
    #[test]
    fn test_config_from_env() {
        env::set_var("AGRO_API_KEY", "  test_key  ");
        env::set_var("AGRO_API_URL", "http://agro.local/agro/1.0/");
        env::set_var("PORT", "9090");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.agro_api_key, "test_key");
        assert_eq!(config.agro_api_url, "http://agro.local/agro/1.0");
        assert_eq!(config.port, 9090);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::Invalid("PORT", _))
        ));

        env::remove_var("PORT");
        env::remove_var("AGRO_API_KEY");
        env::remove_var("AGRO_API_URL");
    }
}
