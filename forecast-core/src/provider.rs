use crate::{
    Config, ForecastError,
    model::{ForecastResult, Location, Metric},
    provider::{geocoding::OpenMeteoGeocoder, openmeteo::OpenMeteoForecast},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::fmt::Debug;

pub mod geocoding;
pub mod openmeteo;

/// Resolves a free-text place name to a single best-match location.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn resolve(&self, name: &str) -> Result<Location, ForecastError>;
}

/// Fetches an hourly series for one metric and keeps only future points.
///
/// `now` is the instant the fetch was initiated; no returned timestamp may
/// precede it.
#[async_trait]
pub trait HourlyForecast: Send + Sync + Debug {
    async fn fetch_hourly(
        &self,
        location: &Location,
        metric: Metric,
        now: DateTime<Utc>,
    ) -> Result<ForecastResult, ForecastError>;
}

/// Construct the Open-Meteo geocoder from config.
pub fn geocoder_from_config(config: &Config) -> Result<Box<dyn Geocoder>, ForecastError> {
    Ok(Box::new(OpenMeteoGeocoder::new(
        config.geocoding_base_url.clone(),
        config.timeout_secs,
    )?))
}

/// Construct the Open-Meteo hourly forecast client from config.
pub fn forecast_from_config(config: &Config) -> Result<Box<dyn HourlyForecast>, ForecastError> {
    Ok(Box::new(OpenMeteoForecast::new(
        config.forecast_base_url.clone(),
        config.timeout_secs,
    )?))
}
