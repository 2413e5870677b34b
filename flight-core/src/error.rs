use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced to callers of the core.
#[derive(Debug, Error)]
pub enum FlightError {
    #[error("Travel date {date} is outside the supported window {earliest} .. {latest}")]
    DateOutOfRange {
        date: NaiveDate,
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    #[error("Invalid travel date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Reasons a live forecast could not be used.
///
/// These never reach the user: every variant is recovered by falling back to
/// generated data, the classification only feeds the logs.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to send request to OpenWeather: {0}")]
    Request(#[source] reqwest::Error),

    #[error("OpenWeather forecast request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse OpenWeather forecast JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("OpenWeather forecast response contained no data")]
    Empty,
}

impl ForecastError {
    /// Whether retrying later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            ForecastError::Request(e) => e.is_timeout() || e.is_connect(),
            ForecastError::Status { status, .. } => status.is_server_error(),
            ForecastError::Client(_) | ForecastError::Malformed(_) | ForecastError::Empty => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_out_of_range_mentions_window() {
        let err = FlightError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            earliest: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            latest: NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
        };

        let msg = err.to_string();
        assert!(msg.contains("2025-03-01"));
        assert!(msg.contains("2025-01-31"));
    }

    #[test]
    fn unauthorized_status_is_not_transient() {
        let err = ForecastError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "Invalid API key".into(),
        };
        assert!(!err.is_transient());

        let err = ForecastError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert!(err.is_transient());
    }
}
