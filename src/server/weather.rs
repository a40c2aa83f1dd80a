//! Weather proxy endpoint.
//!
//! Forwards the coordinates to OpenWeatherMap with the configured key and
//! metric units, returning the provider's JSON verbatim. The key never
//! leaves the server.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::errors::Error;
use crate::server::SharedState;

const PROVIDER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Query for `GET /api/weather`.
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    pub lat: String,
    pub lon: String,
}

/// `GET /api/weather?lat=50.08&lon=14.43`
pub async fn weather(
    State(state): State<SharedState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<serde_json::Value>, Error> {
    let key = state
        .config
        .weather_key
        .as_deref()
        .ok_or_else(|| Error::Config {
            message: "WEATHER_API_KEY is not configured".to_string(),
        })?;

    let response = state
        .http
        .get(PROVIDER_URL)
        .query(&[
            ("lat", query.lat.as_str()),
            ("lon", query.lon.as_str()),
            ("appid", key),
            ("units", "metric"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Upstream {
            message: format!("weather provider returned {}", response.status()),
        });
    }

    let body = response.json().await?;
    Ok(Json(body))
}
