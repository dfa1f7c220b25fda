//! Render-time mapping: unit conversion, time formatting, column headers.
//!
//! Everything here is pure. Conversion and formatting never touch the stored
//! series, which stays in the upstream's native units and ordering.

use chrono::NaiveDateTime;

use crate::model::{Metric, TemperatureUnit};

/// Convert a Celsius reading to rounded Fahrenheit: `round(v * 9/5 + 32)`.
pub fn to_fahrenheit(celsius: f64) -> f64 {
    (celsius * 9.0 / 5.0 + 32.0).round()
}

/// Value cell for the table: temperature honors the active unit (rounded for
/// Fahrenheit, passed through for Celsius); other metrics pass through.
pub fn format_value(metric: Metric, unit: TemperatureUnit, value: f64) -> String {
    match (metric, unit) {
        (Metric::Temperature, TemperatureUnit::Fahrenheit) => {
            format!("{}", to_fahrenheit(value) as i64)
        }
        _ => format!("{value}"),
    }
}

/// 12-hour clock with minute precision, e.g. "3:00 PM".
pub fn format_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%-I:%M %p").to_string()
}

/// Header for the value column, fixed per (metric, unit).
pub const fn column_header(metric: Metric, unit: TemperatureUnit) -> &'static str {
    match (metric, unit) {
        (Metric::Temperature, TemperatureUnit::Celsius) => "Temperature (°C)",
        (Metric::Temperature, TemperatureUnit::Fahrenheit) => "Temperature (°F)",
        (Metric::WindSpeed, _) => "Wind Speed (km/h)",
        (Metric::Precipitation, _) => "Precipitation (mm)",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fahrenheit_anchor_points() {
        assert_eq!(to_fahrenheit(0.0), 32.0);
        assert_eq!(to_fahrenheit(100.0), 212.0);
        assert_eq!(to_fahrenheit(20.0), 68.0);
    }

    #[test]
    fn fahrenheit_rounds_to_nearest_degree() {
        // 21.5°C = 70.7°F
        assert_eq!(to_fahrenheit(21.5), 71.0);
        assert_eq!(to_fahrenheit(-40.0), -40.0);
    }

    #[test]
    fn celsius_passes_through_unrounded() {
        assert_eq!(format_value(Metric::Temperature, TemperatureUnit::Celsius, 21.7), "21.7");
    }

    #[test]
    fn fahrenheit_displays_whole_degrees() {
        assert_eq!(format_value(Metric::Temperature, TemperatureUnit::Fahrenheit, 20.0), "68");
    }

    #[test]
    fn non_temperature_metrics_ignore_the_unit() {
        assert_eq!(format_value(Metric::WindSpeed, TemperatureUnit::Fahrenheit, 12.5), "12.5");
        assert_eq!(format_value(Metric::Precipitation, TemperatureUnit::Fahrenheit, 0.0), "0");
    }

    #[test]
    fn twelve_hour_formatting() {
        let afternoon = NaiveDate::from_ymd_opt(2025, 6, 10)
            .expect("valid date")
            .and_hms_opt(15, 0, 0)
            .expect("valid time");
        assert_eq!(format_time(afternoon), "3:00 PM");

        let morning = NaiveDate::from_ymd_opt(2025, 6, 10)
            .expect("valid date")
            .and_hms_opt(0, 5, 0)
            .expect("valid time");
        assert_eq!(format_time(morning), "12:05 AM");
    }

    #[test]
    fn header_per_metric_and_unit() {
        assert_eq!(column_header(Metric::Temperature, TemperatureUnit::Celsius), "Temperature (°C)");
        assert_eq!(
            column_header(Metric::Temperature, TemperatureUnit::Fahrenheit),
            "Temperature (°F)"
        );
        assert_eq!(column_header(Metric::WindSpeed, TemperatureUnit::Celsius), "Wind Speed (km/h)");
        assert_eq!(
            column_header(Metric::Precipitation, TemperatureUnit::Fahrenheit),
            "Precipitation (mm)"
        );
    }
}
