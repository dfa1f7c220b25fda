use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    Config, ForecastError,
    model::{ForecastResult, Metric, RequestState, TemperatureUnit},
    provider::{Geocoder, HourlyForecast, forecast_from_config, geocoder_from_config},
};

/// The forecast-resolution pipeline: resolve a city name to coordinates, then
/// fetch and filter the hourly series for the requested metric.
///
/// Both steps are single-attempt; any failure aborts the invocation.
#[derive(Debug)]
pub struct Pipeline {
    geocoder: Box<dyn Geocoder>,
    forecast: Box<dyn HourlyForecast>,
}

impl Pipeline {
    pub fn new(geocoder: Box<dyn Geocoder>, forecast: Box<dyn HourlyForecast>) -> Self {
        Self { geocoder, forecast }
    }

    pub fn from_config(config: &Config) -> Result<Self, ForecastError> {
        Ok(Self::new(geocoder_from_config(config)?, forecast_from_config(config)?))
    }

    /// Run one pipeline invocation at the given instant.
    ///
    /// The city is validated before the geocoder is consulted, so an empty
    /// name never reaches the network.
    pub async fn run(
        &self,
        city: &str,
        metric: Metric,
        now: DateTime<Utc>,
    ) -> Result<ForecastResult, ForecastError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ForecastError::InvalidInput);
        }

        let location = self.geocoder.resolve(city).await?;
        self.forecast.fetch_hourly(&location, metric, now).await
    }
}

/// UI selection state plus the request state the view renders against.
///
/// Held in one explicit container rather than ambient globals; each field has
/// a single mutation entry point on [`App`].
#[derive(Debug)]
pub struct AppState {
    pub city: String,
    pub metric: Metric,
    pub unit: TemperatureUnit,
    pub request: RequestState,
}

/// Orchestration wrapper around the pipeline and its state.
///
/// `set_city` and `set_metric` re-invoke the pipeline, mirroring the
/// re-fetch-on-change contract; `set_unit` only affects rendering. Each run
/// replaces `request` wholesale: Loading while in flight, then exactly one of
/// Success or Failure. Runs are awaited to completion one at a time, so two
/// fetches never overlap.
#[derive(Debug)]
pub struct App {
    pipeline: Pipeline,
    state: AppState,
}

impl App {
    pub fn new(pipeline: Pipeline, city: String, metric: Metric, unit: TemperatureUnit) -> Self {
        Self {
            pipeline,
            state: AppState { city, metric, unit, request: RequestState::Idle },
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ForecastError> {
        Ok(Self::new(
            Pipeline::from_config(config)?,
            config.default_city.clone(),
            config.default_metric,
            config.default_unit,
        ))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Change the city and re-run the pipeline.
    pub async fn set_city(&mut self, city: impl Into<String>) {
        self.state.city = city.into();
        info!(city = %self.state.city, "City changed");
        self.refresh().await;
    }

    /// Change the active metric and re-run the pipeline.
    pub async fn set_metric(&mut self, metric: Metric) {
        self.state.metric = metric;
        info!(%metric, "Metric changed");
        self.refresh().await;
    }

    /// Change the temperature display unit. Rendering only; no re-fetch.
    pub fn set_unit(&mut self, unit: TemperatureUnit) {
        self.state.unit = unit;
    }

    /// Re-run the pipeline for the current selection and replace the request
    /// state with the outcome. Failures become a user-facing message; none
    /// escape this method.
    pub async fn refresh(&mut self) {
        self.state.request = RequestState::Loading;

        let outcome = self
            .pipeline
            .run(&self.state.city, self.state.metric, Utc::now())
            .await;

        self.state.request = match outcome {
            Ok(result) => {
                debug!(points = result.len(), "Fetch succeeded");
                RequestState::Success(result)
            }
            Err(err) => {
                debug!(error = %err, "Fetch failed");
                RequestState::Failure(err.to_string())
            }
        };
    }
}
