use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FlightError;

/// Categorical weather condition as reported by OpenWeather's `weather[].main`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Fog,
    /// Anything else the provider reports ("Mist", "Haze", ...), kept verbatim.
    Other(String),
}

impl Condition {
    pub fn as_str(&self) -> &str {
        match self {
            Condition::Clear => "Clear",
            Condition::Clouds => "Clouds",
            Condition::Rain => "Rain",
            Condition::Drizzle => "Drizzle",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
            Condition::Fog => "Fog",
            Condition::Other(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        match value {
            "Clear" => Condition::Clear,
            "Clouds" => Condition::Clouds,
            "Rain" => Condition::Rain,
            "Drizzle" => Condition::Drizzle,
            "Thunderstorm" => Condition::Thunderstorm,
            "Snow" => Condition::Snow,
            "Fog" => Condition::Fog,
            other => Condition::Other(other.to_string()),
        }
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Condition::from(value.as_str())
    }
}

impl From<Condition> for String {
    fn from(value: Condition) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-point forecast used as scoring input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub wind_speed_mps: f64,
    pub condition: Condition,
    pub forecast_time: DateTime<Utc>,
}

/// Where a forecast came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Mock,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Live => f.write_str("OpenWeather"),
            DataSource::Mock => f.write_str("mock data"),
        }
    }
}

/// A forecast together with its origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcedForecast {
    pub source: DataSource,
    pub record: ForecastRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Always within `[0.15, 0.95]`.
    pub probability: f64,
    pub dominant_condition: String,
    /// In evaluation order.
    pub risk_factors: Vec<String>,
}

impl RiskAssessment {
    pub fn has_factor(&self, factor: &str) -> bool {
        self.risk_factors.iter().any(|f| f == factor)
    }
}

/// Ordered reminder strings, never longer than [`AdvisoryList::MAX_LEN`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvisoryList(Vec<String>);

impl AdvisoryList {
    pub const MAX_LEN: usize = 6;

    /// Keep the first `MAX_LEN` entries, dropping the rest.
    pub fn from_ordered<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self(entries.into_iter().take(Self::MAX_LEN).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a AdvisoryList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Bookable travel dates: today and the following [`TravelWindow::DEFAULT_DAYS`] days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl TravelWindow {
    pub const DEFAULT_DAYS: i64 = 30;

    pub fn starting(today: NaiveDate) -> Self {
        Self {
            earliest: today,
            latest: today + Duration::days(Self::DEFAULT_DAYS),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.earliest..=self.latest).contains(&date)
    }

    pub fn validate(&self, date: NaiveDate) -> Result<NaiveDate, FlightError> {
        if self.contains(date) {
            Ok(date)
        } else {
            Err(FlightError::DateOutOfRange {
                date,
                earliest: self.earliest,
                latest: self.latest,
            })
        }
    }

    /// Parse `YYYY-MM-DD` and check it against the window.
    pub fn parse(&self, input: &str) -> Result<NaiveDate, FlightError> {
        let date = NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
            .map_err(|_| FlightError::InvalidDate(input.to_string()))?;
        self.validate(date)
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// December, January, April and October.
pub fn is_holiday_month(date: NaiveDate) -> bool {
    matches!(date.month(), 12 | 1 | 4 | 10)
}
