//! End-to-end analysis for one departure, packaged for display.

use chrono::NaiveDate;
use rand::RngExt;
use serde::Serialize;
use std::fmt;

use crate::{
    advisor::{MODERATE_RISK_THRESHOLD, build_advisories, score_risk},
    model::{
        AdvisoryList, Condition, DataSource, ForecastRecord, RiskAssessment, is_holiday_month,
        is_weekend,
    },
    provider::{ForecastProvider, fetch_forecast},
    tables::{airport_code, weather_weight},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..30 => RiskBand::Low,
            30..60 => RiskBand::Moderate,
            _ => RiskBand::High,
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RiskBand::Low => "LOW",
            RiskBand::Moderate => "MODERATE",
            RiskBand::High => "HIGH",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    /// Share of the weather weight, in whole percent.
    pub weather_impact_pct: u8,
    pub travel_day: String,
    pub season: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlightReport {
    pub location: String,
    pub airport_code: Option<&'static str>,
    pub travel_date: NaiveDate,
    pub source: DataSource,
    pub forecast: ForecastRecord,
    pub assessment: RiskAssessment,
    pub probability_pct: u8,
    pub band: RiskBand,
    pub advisories: AdvisoryList,
    pub insights: Insights,
}

/// Fetch (or generate) a forecast and run the advisor on it.
pub async fn analyze<R>(
    provider: Option<&dyn ForecastProvider>,
    location: &str,
    travel_date: NaiveDate,
    rng: &mut R,
) -> FlightReport
where
    R: RngExt + ?Sized,
{
    let forecast = fetch_forecast(provider, location, rng).await;
    build_report(location, travel_date, forecast.source, forecast.record)
}

pub fn build_report(
    location: &str,
    travel_date: NaiveDate,
    source: DataSource,
    forecast: ForecastRecord,
) -> FlightReport {
    let assessment = score_risk(Some(&forecast), travel_date, location);
    let advisories = build_advisories(&assessment, location);
    let probability_pct = to_percent(assessment.probability);
    let insights = insights(&forecast.condition, &assessment, travel_date);

    FlightReport {
        location: location.to_string(),
        airport_code: airport_code(location),
        travel_date,
        source,
        forecast,
        band: RiskBand::from_percent(probability_pct),
        probability_pct,
        assessment,
        advisories,
        insights,
    }
}

fn insights(condition: &Condition, assessment: &RiskAssessment, travel_date: NaiveDate) -> Insights {
    let travel_day = if is_weekend(travel_date) {
        "Weekend travel increases crowding"
    } else {
        "Weekday travel - typically less crowded"
    };
    let season = if is_holiday_month(travel_date) {
        "Holiday season - expect higher traffic"
    } else {
        "Regular season - normal traffic expected"
    };
    let recommendation = if assessment.probability > MODERATE_RISK_THRESHOLD {
        "Arrive early and stay flexible with your plans"
    } else {
        "Normal check-in procedures should suffice"
    };

    Insights {
        weather_impact_pct: to_percent(weather_weight(condition)),
        travel_day: travel_day.to_string(),
        season: season.to_string(),
        recommendation: recommendation.to_string(),
    }
}

/// Probabilities here live on a 0.05 grid, so rounding gives the intended percent.
fn to_percent(p: f64) -> u8 {
    (p.clamp(0.0, 1.0) * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{advisor::MAX_PROBABILITY, error::ForecastError};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rand::{SeedableRng, rngs::StdRng};

    fn record(condition: Condition, temp: f64, humidity: f64, wind: f64) -> ForecastRecord {
        ForecastRecord {
            temperature_c: temp,
            humidity_pct: humidity,
            wind_speed_mps: wind,
            condition,
            forecast_time: Utc.with_ymd_and_hms(2025, 6, 2, 6, 0, 0).unwrap(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn band_edges() {
        assert_eq!(RiskBand::from_percent(29), RiskBand::Low);
        assert_eq!(RiskBand::from_percent(30), RiskBand::Moderate);
        assert_eq!(RiskBand::from_percent(59), RiskBand::Moderate);
        assert_eq!(RiskBand::from_percent(60), RiskBand::High);
        assert_eq!(RiskBand::from_percent(95), RiskBand::High);
    }

    #[test]
    fn quiet_clear_day_report() {
        // 2025-06-04 is a Wednesday.
        let report = build_report(
            "Mumbai",
            date(2025, 6, 4),
            DataSource::Mock,
            record(Condition::Clear, 30.0, 60.0, 4.0),
        );

        assert_eq!(report.airport_code, Some("BOM"));
        assert_eq!(report.probability_pct, 25);
        assert_eq!(report.band, RiskBand::Low);
        assert_eq!(report.insights.weather_impact_pct, 10);
        assert_eq!(report.insights.travel_day, "Weekday travel - typically less crowded");
        assert_eq!(report.insights.season, "Regular season - normal traffic expected");
        assert_eq!(report.insights.recommendation, "Normal check-in procedures should suffice");
        assert_eq!(
            report.advisories.as_slice().last().map(String::as_str),
            Some("🌧️ Monsoon city - always carry rain gear")
        );
    }

    #[test]
    fn stormy_holiday_weekend_report() {
        // 2025-10-04 is a Saturday.
        let report = build_report(
            "atlantis",
            date(2025, 10, 4),
            DataSource::Live,
            record(Condition::Snow, -2.0, 90.0, 14.0),
        );

        assert_eq!(report.airport_code, None);
        assert_eq!(report.assessment.probability, MAX_PROBABILITY);
        assert_eq!(report.probability_pct, 95);
        assert_eq!(report.band, RiskBand::High);
        assert_eq!(report.insights.weather_impact_pct, 80);
        assert_eq!(report.insights.travel_day, "Weekend travel increases crowding");
        assert_eq!(report.insights.season, "Holiday season - expect higher traffic");
        assert_eq!(report.insights.recommendation, "Arrive early and stay flexible with your plans");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = build_report(
            "delhi",
            date(2025, 1, 8),
            DataSource::Mock,
            record(Condition::Fog, 8.0, 95.0, 2.0),
        );

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["airport_code"], "DEL");
        assert_eq!(json["source"], "mock");
        assert_eq!(json["band"], "HIGH");
        assert_eq!(json["forecast"]["condition"], "Fog");
        assert_eq!(json["travel_date"], "2025-01-08");
        assert!(json["advisories"].as_array().unwrap().len() <= AdvisoryList::MAX_LEN);
    }

    #[derive(Debug)]
    struct Offline;

    #[async_trait]
    impl ForecastProvider for Offline {
        async fn get_forecast(&self, _location: &str) -> Result<ForecastRecord, ForecastError> {
            Err(ForecastError::Empty)
        }
    }

    #[tokio::test]
    async fn analyze_survives_offline_provider() {
        let mut rng = StdRng::seed_from_u64(99);

        let report = analyze(Some(&Offline), "pune", date(2025, 3, 12), &mut rng).await;

        assert_eq!(report.source, DataSource::Mock);
        assert!(report.assessment.probability >= 0.15);
        assert!(report.assessment.probability <= MAX_PROBABILITY);
        assert!(!report.advisories.is_empty());
    }
}
