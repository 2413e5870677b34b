use chrono::{DateTime, Duration, Utc};
use rand::RngExt;

use crate::model::{Condition, ForecastRecord};

const MONSOON: &[Condition] =
    &[Condition::Rain, Condition::Thunderstorm, Condition::Drizzle, Condition::Clouds];

const WINTER: &[Condition] = &[Condition::Fog, Condition::Clear, Condition::Clouds];

const ANY_SEASON: &[Condition] = &[
    Condition::Clear,
    Condition::Clouds,
    Condition::Rain,
    Condition::Drizzle,
    Condition::Thunderstorm,
];

/// Conditions plausible in a given month (1 = January).
pub fn seasonal_conditions(month: u32) -> &'static [Condition] {
    match month {
        6..=9 => MONSOON,
        12 | 1 | 2 => WINTER,
        _ => ANY_SEASON,
    }
}

/// Generate a stand-in forecast for `month`, six hours after `now`.
pub fn mock_forecast<R>(rng: &mut R, month: u32, now: DateTime<Utc>) -> ForecastRecord
where
    R: RngExt + ?Sized,
{
    let candidates = seasonal_conditions(month);
    let condition = candidates
        .get(rng.random_range(0..candidates.len()))
        .cloned()
        .unwrap_or(Condition::Clear);

    ForecastRecord {
        temperature_c: f64::from(rng.random_range(15..=35_i32)),
        humidity_pct: f64::from(rng.random_range(40..=90_i32)),
        wind_speed_mps: rng.random_range(2.0..15.0),
        condition,
        forecast_time: now + Duration::hours(6),
    }
}
