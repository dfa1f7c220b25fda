use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{ForecastError, model::Location};

use super::Geocoder;

/// Client for the Open-Meteo geocoding search endpoint.
///
/// One lookup per invocation: language fixed to English, at most one match
/// requested, the first match's coordinates win.
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    base_url: String,
    http: Client,
}

impl OpenMeteoGeocoder {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { base_url, http })
    }
}

#[derive(Debug, Deserialize)]
struct GeoMatch {
    latitude: f64,
    longitude: f64,
    name: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeoResponse {
    // Absent entirely when the name matches nothing.
    results: Option<Vec<GeoMatch>>,
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    async fn resolve(&self, name: &str) -> Result<Location, ForecastError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ForecastError::InvalidInput);
        }

        let url = format!("{}/search", self.base_url);
        debug!(city = %name, "Resolving city name");

        let res = self
            .http
            .get(&url)
            .query(&[("name", name), ("count", "1"), ("language", "en"), ("format", "json")])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ForecastError::Network(format!(
                "Geocoding request failed with status {status}"
            )));
        }

        let parsed: GeoResponse = res.json().await?;

        let best = parsed
            .results
            .and_then(|mut matches| if matches.is_empty() { None } else { Some(matches.remove(0)) })
            .ok_or(ForecastError::NotFound)?;

        let display_name = match (best.name, best.country) {
            (Some(name), Some(country)) => Some(format!("{name}, {country}")),
            (Some(name), None) => Some(name),
            _ => None,
        };

        debug!(
            lat = best.latitude,
            lon = best.longitude,
            name = display_name.as_deref().unwrap_or("<unnamed>"),
            "Resolved location"
        );

        Ok(Location {
            latitude: best.latitude,
            longitude: best.longitude,
            name: display_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoder() -> OpenMeteoGeocoder {
        OpenMeteoGeocoder::new("http://unused.invalid".to_string(), 5)
            .expect("client creation should succeed")
    }

    #[tokio::test]
    async fn empty_name_rejected_before_any_request() {
        // base_url is unroutable, so reaching the network would error differently.
        let err = geocoder().resolve("").await.unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput));
    }

    #[tokio::test]
    async fn whitespace_only_name_rejected() {
        let err = geocoder().resolve("   \t").await.unwrap_err();
        assert!(matches!(err, ForecastError::InvalidInput));
    }

    #[test]
    fn missing_results_field_parses_as_none() {
        let parsed: GeoResponse =
            serde_json::from_str("{\"generationtime_ms\": 0.5}").expect("should parse");
        assert!(parsed.results.is_none());
    }
}
