//! Application settings loaded from the environment.
//!
//! `.env` loading happens in `main` before this runs; everything here reads
//! plain environment variables with sensible defaults. The weather key has
//! no default - the proxy endpoint reports a configuration error when it is
//! missing, the rest of the application runs fine without it.

use crate::errors::{Error, Result};
use tracing::info;

const DEFAULT_PORT: u16 = 8080;

/// Runtime settings for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// TCP port the HTTP server binds to
    pub port: u16,
    /// Path to the TOML file with default categories and tags
    pub seed_path: String,
    /// OpenWeatherMap API key for the weather proxy, if configured
    pub weather_key: Option<String>,
}

impl AppConfig {
    /// Loads settings from the environment.
    ///
    /// # Errors
    /// Returns [`Error::Config`] when a present variable has an unusable
    /// value (e.g. a non-numeric port).
    pub fn load() -> Result<Self> {
        let port = match std::env::var("HOMER_PORT") {
            Ok(value) => parse_port(&value)?,
            Err(_) => {
                info!("HOMER_PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        let seed_path =
            std::env::var("HOMER_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

        let weather_key = std::env::var("WEATHER_API_KEY").ok();
        if weather_key.is_none() {
            info!("WEATHER_API_KEY not set, weather proxy disabled");
        }

        Ok(Self {
            port,
            seed_path,
            weather_key,
        })
    }
}

fn parse_port(value: &str) -> Result<u16> {
    value.parse().map_err(|_| Error::Config {
        message: format!("HOMER_PORT is not a valid port number: {value}"),
    })
}
