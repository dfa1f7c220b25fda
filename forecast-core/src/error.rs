use thiserror::Error;

/// Failure taxonomy for a single pipeline invocation.
///
/// Every variant is terminal: nothing is retried automatically, and the
/// orchestration shell converts whichever error surfaces into a single
/// human-readable `RequestState::Failure` message.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// City name was empty after trimming; rejected before any network call.
    #[error("Please enter a valid city.")]
    InvalidInput,

    /// Geocoding returned no match for the given name.
    #[error("City not found")]
    NotFound,

    /// Transport failure, non-success status, or unparseable response body.
    #[error("Network error: {0}")]
    Network(String),

    /// Forecast response was missing the hourly time or value series.
    #[error("Weather data unavailable")]
    DataUnavailable,
}

impl From<reqwest::Error> for ForecastError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(ForecastError::InvalidInput.to_string(), "Please enter a valid city.");
        assert_eq!(ForecastError::NotFound.to_string(), "City not found");
        assert_eq!(ForecastError::DataUnavailable.to_string(), "Weather data unavailable");
        assert!(
            ForecastError::Network("connection refused".into())
                .to_string()
                .contains("connection refused")
        );
    }
}
