use async_trait::async_trait;
use chrono::{Datelike, Utc};
use rand::RngExt;
use std::fmt::Debug;
use tracing::{info, warn};

use crate::{
    Config,
    error::ForecastError,
    model::{DataSource, ForecastRecord, SourcedForecast},
    provider::{mock::mock_forecast, openweather::OpenWeatherProvider},
};

pub mod mock;
pub mod openweather;

/// Credential value shipped in sample configs; treated as "no credential".
pub const PLACEHOLDER_API_KEY: &str = "your_openweather_api_key";

#[async_trait]
pub trait ForecastProvider: Send + Sync + Debug {
    async fn get_forecast(&self, location: &str) -> Result<ForecastRecord, ForecastError>;
}

/// Returns the key unless it is empty or the placeholder.
pub fn usable_api_key(api_key: Option<&str>) -> Option<&str> {
    api_key
        .map(str::trim)
        .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
}

/// Build the live provider for a credential, if there is a usable one.
pub fn provider_from_credential(
    api_key: Option<&str>,
    config: &Config,
) -> Option<Box<dyn ForecastProvider>> {
    let key = usable_api_key(api_key)?;

    match OpenWeatherProvider::new(key.to_owned(), config) {
        Ok(provider) => Some(Box::new(provider)),
        Err(e) => {
            warn!(error = %e, "could not set up OpenWeather client");
            None
        }
    }
}

/// Get a forecast for `location`, never failing.
///
/// Without a provider, or when the provider errors for any reason, a
/// generated forecast drawn from `rng` is returned instead.
pub async fn fetch_forecast<R>(
    provider: Option<&dyn ForecastProvider>,
    location: &str,
    rng: &mut R,
) -> SourcedForecast
where
    R: RngExt + ?Sized,
{
    if let Some(provider) = provider {
        match provider.get_forecast(location).await {
            Ok(record) => {
                info!(location, "using live forecast");
                return SourcedForecast { source: DataSource::Live, record };
            }
            Err(e) => {
                warn!(location, error = %e, transient = e.is_transient(), "live forecast unavailable, using mock data");
            }
        }
    } else {
        info!(location, "no API key configured, using mock data");
    }

    let now = Utc::now();
    SourcedForecast {
        source: DataSource::Mock,
        record: mock_forecast(rng, now.month(), now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Condition;
    use rand::{SeedableRng, rngs::StdRng};

    #[derive(Debug)]
    struct Fixed(ForecastRecord);

    #[async_trait]
    impl ForecastProvider for Fixed {
        async fn get_forecast(&self, _location: &str) -> Result<ForecastRecord, ForecastError> {
            Ok(self.0.clone())
        }
    }

    #[derive(Debug)]
    struct Broken;

    #[async_trait]
    impl ForecastProvider for Broken {
        async fn get_forecast(&self, _location: &str) -> Result<ForecastRecord, ForecastError> {
            Err(ForecastError::Empty)
        }
    }

    #[test]
    fn placeholder_and_blank_keys_are_unusable() {
        assert_eq!(usable_api_key(None), None);
        assert_eq!(usable_api_key(Some("")), None);
        assert_eq!(usable_api_key(Some("   ")), None);
        assert_eq!(usable_api_key(Some(PLACEHOLDER_API_KEY)), None);
        assert_eq!(usable_api_key(Some(" abc123 ")), Some("abc123"));
    }

    #[test]
    fn no_provider_without_credential() {
        let cfg = Config::default();
        assert!(provider_from_credential(None, &cfg).is_none());
        assert!(provider_from_credential(Some(PLACEHOLDER_API_KEY), &cfg).is_none());
        assert!(provider_from_credential(Some("KEY"), &cfg).is_some());
    }

    #[tokio::test]
    async fn live_forecast_is_passed_through() {
        let record = ForecastRecord {
            temperature_c: 2.0,
            humidity_pct: 97.0,
            wind_speed_mps: 1.0,
            condition: Condition::Snow,
            forecast_time: Utc::now(),
        };
        let provider = Fixed(record.clone());
        let mut rng = StdRng::seed_from_u64(1);

        let got = fetch_forecast(Some(&provider), "london", &mut rng).await;

        assert_eq!(got.source, DataSource::Live);
        assert_eq!(got.record, record);
    }

    #[tokio::test]
    async fn provider_failure_falls_back_to_mock() {
        let mut rng = StdRng::seed_from_u64(2);

        let got = fetch_forecast(Some(&Broken), "london", &mut rng).await;

        assert_eq!(got.source, DataSource::Mock);
        assert!((15.0..=35.0).contains(&got.record.temperature_c));
    }

    #[tokio::test]
    async fn missing_provider_uses_mock() {
        let mut rng = StdRng::seed_from_u64(3);

        let got = fetch_forecast(None, "goa", &mut rng).await;

        assert_eq!(got.source, DataSource::Mock);
        assert!(got.record.forecast_time > Utc::now());
    }
}
