use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, NaiveDateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    ForecastError,
    model::{ForecastResult, Location, MAX_POINTS, Metric, TimeSeriesPoint},
};

use super::HourlyForecast;

/// The forecast window requested upstream; only future points within it are shown.
const FORECAST_DAYS: u8 = 2;

/// Client for the Open-Meteo hourly forecast endpoint.
#[derive(Debug, Clone)]
pub struct OpenMeteoForecast {
    base_url: String,
    http: Client,
}

impl OpenMeteoForecast {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { base_url, http })
    }
}

#[derive(Debug, Deserialize)]
struct HourlyBlock {
    // The time axis can be absent just like the value series; both gaps are
    // data problems, not transport problems.
    time: Option<Vec<String>>,
    temperature_2m: Option<Vec<f64>>,
    windspeed_10m: Option<Vec<f64>>,
    precipitation: Option<Vec<f64>>,
}

impl HourlyBlock {
    /// Value series for the requested metric, if the response carried it.
    fn series(&self, metric: Metric) -> Option<&[f64]> {
        match metric {
            Metric::Temperature => self.temperature_2m.as_deref(),
            Metric::WindSpeed => self.windspeed_10m.as_deref(),
            Metric::Precipitation => self.precipitation.as_deref(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct HourlyResponse {
    // With timezone=auto the API reports the location's offset; timestamps in
    // `hourly.time` are naive local times in that zone.
    utc_offset_seconds: Option<i64>,
    hourly: Option<HourlyBlock>,
}

/// Parse an Open-Meteo hourly timestamp (naive local ISO 8601, minute precision).
fn parse_timestamp(s: &str) -> Result<NaiveDateTime, ForecastError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| ForecastError::DataUnavailable)
}

/// Keep the paired (timestamp, value) entries at or after `local_now`, in the
/// order received, truncated to the first [`MAX_POINTS`] survivors.
fn retain_future(
    times: &[String],
    values: &[f64],
    local_now: NaiveDateTime,
) -> Result<Vec<TimeSeriesPoint>, ForecastError> {
    let mut points = Vec::new();

    for (time, value) in times.iter().zip(values.iter()) {
        let timestamp = parse_timestamp(time)?;
        if timestamp >= local_now {
            points.push(TimeSeriesPoint { timestamp, value: *value });
            if points.len() == MAX_POINTS {
                break;
            }
        }
    }

    Ok(points)
}

#[async_trait]
impl HourlyForecast for OpenMeteoForecast {
    async fn fetch_hourly(
        &self,
        location: &Location,
        metric: Metric,
        now: DateTime<Utc>,
    ) -> Result<ForecastResult, ForecastError> {
        let url = format!("{}/forecast", self.base_url);
        debug!(lat = location.latitude, lon = location.longitude, %metric, "Fetching hourly forecast");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", metric.param_key().to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ForecastError::Network(format!(
                "Forecast request failed with status {status}"
            )));
        }

        let parsed: HourlyResponse = res.json().await?;

        let offset = parsed.utc_offset_seconds.unwrap_or(0);
        let hourly = parsed.hourly.ok_or(ForecastError::DataUnavailable)?;
        let times = hourly.time.as_deref().ok_or(ForecastError::DataUnavailable)?;
        let values = hourly.series(metric).ok_or(ForecastError::DataUnavailable)?;

        // Shift the UTC fetch instant into the location's frame so the
        // comparison happens in the same zone as the naive timestamps.
        let local_now = (now + ChronoDuration::seconds(offset)).naive_utc();
        let points = retain_future(times, values, local_now)?;

        debug!(total = times.len(), kept = points.len(), "Filtered hourly series");

        Ok(ForecastResult { place: location.name.clone(), points })
    }
}
