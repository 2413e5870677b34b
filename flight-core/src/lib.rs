//! Core library for the `flight` reminder CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Forecast sources (OpenWeather, generated fallback data)
//! - Delay scoring and reminder selection
//! - Shared domain models and the assembled report
//!
//! It is used by `flight-cli`, but can also be reused by other binaries or services.

pub mod advisor;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
pub mod tables;

pub use advisor::{build_advisories, score_risk};
pub use config::Config;
pub use error::{FlightError, ForecastError};
pub use model::{
    AdvisoryList, Condition, DataSource, ForecastRecord, RiskAssessment, SourcedForecast,
    TravelWindow,
};
pub use provider::{ForecastProvider, fetch_forecast, provider_from_credential};
pub use report::{FlightReport, RiskBand, analyze};
