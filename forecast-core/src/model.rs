use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Upper bound on displayed points: the first ten future hourly readings.
pub const MAX_POINTS: usize = 10;

/// Coordinates produced by the geocoding resolver, consumed once per fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Resolved display name, when the upstream match carries one.
    pub name: Option<String>,
}

/// The forecast metric the user selected. Exactly one is active at a time.
///
/// The upstream parameter mapping lives in [`Metric::param_key`]; keeping the
/// enum closed means a fourth metric is a compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Temperature,
    WindSpeed,
    Precipitation,
}

impl Metric {
    /// Hourly parameter key understood by the Open-Meteo forecast endpoint.
    pub const fn param_key(self) -> &'static str {
        match self {
            Metric::Temperature => "temperature_2m",
            Metric::WindSpeed => "windspeed_10m",
            Metric::Precipitation => "precipitation",
        }
    }

    pub const fn all() -> &'static [Metric] {
        &[Metric::Temperature, Metric::WindSpeed, Metric::Precipitation]
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Metric::Temperature => "temperature",
            Metric::WindSpeed => "windspeed",
            Metric::Precipitation => "precipitation",
        };
        f.write_str(s)
    }
}

impl TryFrom<&str> for Metric {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "temperature" => Ok(Metric::Temperature),
            "windspeed" => Ok(Metric::WindSpeed),
            "precipitation" => Ok(Metric::Precipitation),
            _ => Err(anyhow::anyhow!(
                "Unknown metric '{value}'. Supported metrics: temperature, windspeed, precipitation."
            )),
        }
    }
}

/// Display unit for the temperature metric only; stored values stay Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    Celsius,
    #[default]
    Fahrenheit,
}

impl TemperatureUnit {
    pub const fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub const fn all() -> &'static [TemperatureUnit] {
        &[TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit]
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TemperatureUnit::Celsius => "celsius",
            TemperatureUnit::Fahrenheit => "fahrenheit",
        };
        f.write_str(s)
    }
}

/// One hourly reading, timestamped in the forecast location's local time.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesPoint {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// The filtered, truncated hourly series for one successful fetch.
///
/// Invariants: at most [`MAX_POINTS`] points, ascending as delivered upstream,
/// and every timestamp is at or after the instant the fetch began. A result is
/// never mutated in place; the next fetch replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResult {
    /// Resolved place name, when geocoding supplied one; shown above the table.
    pub place: Option<String>,
    pub points: Vec<TimeSeriesPoint>,
}

impl ForecastResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The single piece of state the UI renders against. Exactly one variant
/// holds at any time and transitions always replace the whole value.
#[derive(Debug, Clone, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(ForecastResult),
    Failure(String),
}
