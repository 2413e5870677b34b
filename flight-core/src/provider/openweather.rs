use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::{
    Config,
    error::ForecastError,
    model::{Condition, ForecastRecord},
};

use super::ForecastProvider;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, config: &Config) -> Result<Self, ForecastError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ForecastError::Client)?;

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http,
        })
    }

    async fn fetch(&self, location: &str) -> Result<ForecastRecord, ForecastError> {
        debug!(location, url = %self.base_url, "requesting OpenWeather forecast");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(ForecastError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(ForecastError::Request)?;

        if !status.is_success() {
            return Err(ForecastError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        parse_forecast(&body)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastEntry {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    list: Vec<OwForecastEntry>,
}

/// Turn a `/data/2.5/forecast` body into a record built from its first slot.
pub fn parse_forecast(body: &str) -> Result<ForecastRecord, ForecastError> {
    let parsed: OwForecastResponse = serde_json::from_str(body)?;

    let entry = parsed.list.into_iter().next().ok_or(ForecastError::Empty)?;
    let weather = entry.weather.into_iter().next().ok_or(ForecastError::Empty)?;

    Ok(ForecastRecord {
        temperature_c: entry.main.temp,
        humidity_pct: entry.main.humidity,
        wind_speed_mps: entry.wind.speed,
        condition: Condition::from(weather.main),
        forecast_time: DateTime::from_timestamp(entry.dt, 0).unwrap_or_else(Utc::now),
    })
}

#[async_trait]
impl ForecastProvider for OpenWeatherProvider {
    async fn get_forecast(&self, location: &str) -> Result<ForecastRecord, ForecastError> {
        self.fetch(location).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
