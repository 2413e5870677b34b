//! Fixed lookup tables, built once on first use.

use std::{collections::HashMap, sync::LazyLock};

use crate::model::Condition;

/// Weight used for conditions missing from [`WEATHER_WEIGHTS`].
pub const DEFAULT_WEATHER_WEIGHT: f64 = 0.2;

pub static WEATHER_WEIGHTS: LazyLock<HashMap<Condition, f64>> = LazyLock::new(|| {
    HashMap::from([
        (Condition::Rain, 0.3),
        (Condition::Thunderstorm, 0.7),
        (Condition::Snow, 0.8),
        (Condition::Fog, 0.6),
        (Condition::Clear, 0.1),
        (Condition::Clouds, 0.2),
        (Condition::Drizzle, 0.25),
    ])
});

pub static CONDITION_ADVISORIES: LazyLock<HashMap<Condition, [&'static str; 2]>> =
    LazyLock::new(|| {
        HashMap::from([
            (Condition::Rain, ["☔ Carry umbrella", "🚗 Allow extra travel time to airport"]),
            (
                Condition::Thunderstorm,
                ["⛈️ Monitor weather updates", "📞 Consider travel insurance"],
            ),
            (Condition::Snow, ["❄️ Dress warmly", "🚙 Use reliable transport to airport"]),
            (
                Condition::Fog,
                ["🌫️ Expect visibility delays", "📱 Download airline app for updates"],
            ),
            (Condition::Clear, ["☀️ Perfect flying weather!", "😎 Enjoy your journey"]),
        ])
    });

/// Keyed by lower-cased city name.
pub static CITY_TIPS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("mumbai", "🌧️ Monsoon city - always carry rain gear"),
        ("delhi", "🌫️ Fog common in winter mornings"),
        ("bangalore", "🌤️ Pleasant weather year-round"),
        ("pune", "🌦️ Check monsoon updates in rainy season"),
    ])
});

/// Supported departure cities in display order, with their main airport.
pub const AIRPORTS: &[(&str, &str)] = &[
    ("mumbai", "BOM"),
    ("delhi", "DEL"),
    ("bangalore", "BLR"),
    ("chennai", "MAA"),
    ("kolkata", "CCU"),
    ("hyderabad", "HYD"),
    ("pune", "PNQ"),
    ("ahmedabad", "AMD"),
    ("goa", "GOI"),
    ("kochi", "COK"),
    ("jaipur", "JAI"),
    ("lucknow", "LKO"),
    ("london", "LHR"),
    ("new york", "JFK"),
    ("dubai", "DXB"),
    ("singapore", "SIN"),
];

static AIRPORT_CODES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| AIRPORTS.iter().copied().collect());

pub fn weather_weight(condition: &Condition) -> f64 {
    WEATHER_WEIGHTS.get(condition).copied().unwrap_or(DEFAULT_WEATHER_WEIGHT)
}

pub fn city_tip(location: &str) -> Option<&'static str> {
    CITY_TIPS.get(location.trim().to_lowercase().as_str()).copied()
}

pub fn airport_code(location: &str) -> Option<&'static str> {
    AIRPORT_CODES.get(location.trim().to_lowercase().as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_condition_gets_default_weight() {
        assert_eq!(weather_weight(&Condition::Other("Haze".into())), DEFAULT_WEATHER_WEIGHT);
        assert_eq!(weather_weight(&Condition::Snow), 0.8);
    }

    #[test]
    fn city_lookups_ignore_case() {
        assert_eq!(airport_code("New York"), Some("JFK"));
        assert_eq!(airport_code("Atlantis"), None);
        assert!(city_tip("DELHI").is_some());
        assert!(city_tip("chennai").is_none());
    }

    #[test]
    fn every_tip_city_has_an_airport() {
        for city in CITY_TIPS.keys() {
            assert!(airport_code(city).is_some(), "{city} missing from airport table");
        }
    }
}
