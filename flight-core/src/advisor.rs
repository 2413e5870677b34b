//! Delay scoring and reminder selection.
//!
//! Scoring is an additive sum of independent factors on top of a base rate,
//! capped at [`MAX_PROBABILITY`]. Reminders are picked tier by tier and the
//! concatenation is cut at [`AdvisoryList::MAX_LEN`].

use chrono::NaiveDate;
use tracing::debug;

use crate::{
    model::{AdvisoryList, Condition, ForecastRecord, RiskAssessment, is_holiday_month, is_weekend},
    tables::{CONDITION_ADVISORIES, city_tip, weather_weight},
};

pub const BASE_PROBABILITY: f64 = 0.15;
pub const MAX_PROBABILITY: f64 = 0.95;

const TEMPERATURE_FACTOR: f64 = 0.2;
const HUMIDITY_FACTOR: f64 = 0.1;
const WIND_FACTOR: f64 = 0.15;
const WEEKEND_FACTOR: f64 = 0.1;
const HOLIDAY_FACTOR: f64 = 0.15;

const MIN_COMFORT_TEMP_C: f64 = 5.0;
const MAX_COMFORT_TEMP_C: f64 = 40.0;
const FOG_HUMIDITY_PCT: f64 = 85.0;
const STRONG_WIND_MPS: f64 = 10.0;

/// Weather weights above this are reported as a risk factor.
const NOTABLE_WEATHER_WEIGHT: f64 = 0.2;

pub const HIGH_RISK_THRESHOLD: f64 = 0.6;
pub const MODERATE_RISK_THRESHOLD: f64 = 0.4;

pub const NO_DATA_CONDITION: &str = "Unable to fetch weather data";
pub const HUMIDITY_MARKER: &str = "High humidity (fog risk)";
pub const WEEKEND_MARKER: &str = "Weekend travel";
pub const HOLIDAY_MARKER: &str = "Holiday season";

/// Score the delay risk for one departure.
///
/// A missing forecast yields the base rate with no risk factors.
pub fn score_risk(
    forecast: Option<&ForecastRecord>,
    travel_date: NaiveDate,
    location: &str,
) -> RiskAssessment {
    let Some(forecast) = forecast else {
        debug!(location, "no forecast available, using base probability");
        return RiskAssessment {
            probability: BASE_PROBABILITY,
            dominant_condition: NO_DATA_CONDITION.to_string(),
            risk_factors: Vec::new(),
        };
    };

    let weather = weather_weight(&forecast.condition);

    let temperature = if forecast.temperature_c < MIN_COMFORT_TEMP_C
        || forecast.temperature_c > MAX_COMFORT_TEMP_C
    {
        TEMPERATURE_FACTOR
    } else {
        0.0
    };
    let humidity = if forecast.humidity_pct > FOG_HUMIDITY_PCT { HUMIDITY_FACTOR } else { 0.0 };
    let wind = if forecast.wind_speed_mps > STRONG_WIND_MPS { WIND_FACTOR } else { 0.0 };
    let weekend = if is_weekend(travel_date) { WEEKEND_FACTOR } else { 0.0 };
    let holiday = if is_holiday_month(travel_date) { HOLIDAY_FACTOR } else { 0.0 };

    let total = BASE_PROBABILITY + weather + temperature + humidity + wind + weekend + holiday;
    let probability = round_to_percent(total.min(MAX_PROBABILITY));

    let mut risk_factors = Vec::new();
    if weather > NOTABLE_WEATHER_WEIGHT {
        risk_factors.push(format!("Weather: {}", forecast.condition));
    }
    if temperature > 0.0 {
        risk_factors.push(format!("Extreme temperature: {}°C", forecast.temperature_c));
    }
    if humidity > 0.0 {
        risk_factors.push(HUMIDITY_MARKER.to_string());
    }
    if wind > 0.0 {
        risk_factors.push(format!("Strong winds: {:.1} m/s", forecast.wind_speed_mps));
    }
    if weekend > 0.0 {
        risk_factors.push(WEEKEND_MARKER.to_string());
    }
    if holiday > 0.0 {
        risk_factors.push(HOLIDAY_MARKER.to_string());
    }

    debug!(
        location,
        %travel_date,
        condition = %forecast.condition,
        probability,
        factors = risk_factors.len(),
        "scored delay risk"
    );

    RiskAssessment {
        probability,
        dominant_condition: forecast.condition.to_string(),
        risk_factors,
    }
}

/// Pick up to six reminders for an assessment, most urgent tier first.
pub fn build_advisories(assessment: &RiskAssessment, location: &str) -> AdvisoryList {
    let mut entries: Vec<String> = Vec::new();

    if assessment.probability >= HIGH_RISK_THRESHOLD {
        entries.push("🚨 HIGH delay risk - arrive 2+ hours early".into());
        entries.push("📱 Check flight status frequently".into());
    } else if assessment.probability >= MODERATE_RISK_THRESHOLD {
        entries.push("⚠️ MODERATE delay risk - arrive 90 minutes early".into());
    } else {
        entries.push("✅ LOW delay risk - standard check-in time".into());
    }

    let condition = Condition::from(assessment.dominant_condition.as_str());
    if let Some(tips) = CONDITION_ADVISORIES.get(&condition) {
        entries.extend(tips.iter().map(|t| t.to_string()));
    }

    if assessment.has_factor(WEEKEND_MARKER) {
        entries.push("🏃 Expect crowded airport - use online check-in".into());
    }
    if assessment.has_factor(HOLIDAY_MARKER) {
        entries.push("🎄 Holiday rush - book airport parking in advance".into());
    }

    if let Some(tip) = city_tip(location) {
        entries.push(tip.to_string());
    }

    AdvisoryList::from_ordered(entries)
}

/// Factor weights are multiples of 0.05; strip float noise so band
/// comparisons at 0.4 and 0.6 are exact.
fn round_to_percent(p: f64) -> f64 {
    (p * 100.0).round() / 100.0
}
