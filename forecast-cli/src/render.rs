//! Table rendering for the results area.

use forecast_core::{
    AppState, ForecastResult, Metric, RequestState, TemperatureUnit,
    display::{column_header, format_time, format_value},
};
use tabled::{builder::Builder, settings::Style};

/// Message shown while a fetch is in flight.
pub const LOADING_MESSAGE: &str = "Loading data...";

/// Render the current request state: the loading message, the error message,
/// or the two-column (Time, value) table.
pub fn render(state: &AppState) -> String {
    match &state.request {
        RequestState::Idle => String::new(),
        RequestState::Loading => LOADING_MESSAGE.to_string(),
        RequestState::Failure(message) => message.clone(),
        RequestState::Success(result) => {
            let table = render_table(result, state.metric, state.unit);
            match &result.place {
                Some(place) => format!("{place}\n{table}"),
                None => table,
            }
        }
    }
}

fn render_table(result: &ForecastResult, metric: Metric, unit: TemperatureUnit) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Time", column_header(metric, unit)]);

    for point in &result.points {
        builder.push_record([
            format_time(point.timestamp),
            format_value(metric, unit, point.value),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use forecast_core::TimeSeriesPoint;

    fn state_with(request: RequestState, metric: Metric, unit: TemperatureUnit) -> AppState {
        AppState { city: "Austin".into(), metric, unit, request }
    }

    fn one_point_result() -> ForecastResult {
        ForecastResult {
            place: Some("Austin, United States".into()),
            points: vec![TimeSeriesPoint {
                timestamp: NaiveDate::from_ymd_opt(2025, 6, 10)
                    .expect("valid date")
                    .and_hms_opt(15, 0, 0)
                    .expect("valid time"),
                value: 20.0,
            }],
        }
    }

    #[test]
    fn loading_state_renders_the_loading_message() {
        let state =
            state_with(RequestState::Loading, Metric::Temperature, TemperatureUnit::Celsius);
        assert_eq!(render(&state), "Loading data...");
    }

    #[test]
    fn failure_state_renders_the_message_alone() {
        let state = state_with(
            RequestState::Failure("City not found".into()),
            Metric::Temperature,
            TemperatureUnit::Celsius,
        );
        assert_eq!(render(&state), "City not found");
    }

    #[test]
    fn success_renders_converted_temperature_rows() {
        let state = state_with(
            RequestState::Success(one_point_result()),
            Metric::Temperature,
            TemperatureUnit::Fahrenheit,
        );

        let out = render(&state);
        assert!(out.contains("Temperature (°F)"));
        assert!(out.contains("3:00 PM"));
        assert!(out.contains("68"));
    }

    #[test]
    fn success_renders_the_resolved_place_above_the_table() {
        let state = state_with(
            RequestState::Success(one_point_result()),
            Metric::Temperature,
            TemperatureUnit::Celsius,
        );

        let out = render(&state);
        assert!(out.starts_with("Austin, United States\n"));
    }

    #[test]
    fn missing_place_renders_the_table_alone() {
        let mut result = one_point_result();
        result.place = None;

        let state =
            state_with(RequestState::Success(result), Metric::Temperature, TemperatureUnit::Celsius);

        let out = render(&state);
        assert!(out.starts_with("╭"));
    }

    #[test]
    fn empty_result_still_renders_the_header_row() {
        let state = state_with(
            RequestState::Success(ForecastResult::default()),
            Metric::Precipitation,
            TemperatureUnit::Celsius,
        );

        let out = render(&state);
        assert!(out.contains("Time"));
        assert!(out.contains("Precipitation (mm)"));
    }
}
