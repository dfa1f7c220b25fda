//! Core library for the hourly `forecast` viewer.
//!
//! This crate defines:
//! - Configuration handling (endpoints, defaults)
//! - The Open-Meteo geocoding and hourly-forecast clients
//! - The forecast-resolution pipeline (resolve city, fetch series, keep the
//!   next ten future points)
//! - Presentation helpers (unit conversion, time formatting, headers)
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use config::Config;
pub use error::ForecastError;
pub use model::{
    ForecastResult, Location, MAX_POINTS, Metric, RequestState, TemperatureUnit, TimeSeriesPoint,
};
pub use pipeline::{App, AppState, Pipeline};
pub use provider::{Geocoder, HourlyForecast};
