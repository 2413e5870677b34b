use flight_core::FlightReport;

/// Human-readable rendering of a report.
pub fn render_report(report: &FlightReport) -> String {
    let mut out = String::new();
    let code = report.airport_code.unwrap_or("N/A");
    let f = &report.forecast;

    out.push_str(&format!(
        "Flight analysis for {} ({code}) on {}\n\n",
        title_case(&report.location),
        report.travel_date.format("%B %d, %Y"),
    ));
    out.push_str(&format!(
        "Delay risk: {}  ({}% probability)\n\n",
        report.band, report.probability_pct
    ));

    out.push_str(&format!("Weather forecast ({})\n", report.source));
    out.push_str(&format!("  Weather:     {}\n", f.condition));
    out.push_str(&format!("  Temperature: {}°C\n", f.temperature_c));
    out.push_str(&format!("  Humidity:    {}%\n", f.humidity_pct));
    out.push_str(&format!("  Wind speed:  {:.1} m/s\n", f.wind_speed_mps));
    out.push_str(&format!("  Valid at:    {}\n", f.forecast_time.format("%Y-%m-%d %H:%M UTC")));

    if !report.assessment.risk_factors.is_empty() {
        out.push_str("\nRisk factors\n");
        for factor in &report.assessment.risk_factors {
            out.push_str(&format!("  • {factor}\n"));
        }
    }

    out.push_str("\nReminders\n");
    for (i, reminder) in report.advisories.iter().enumerate() {
        out.push_str(&format!("  {}. {reminder}\n", i + 1));
    }

    let insights = &report.insights;
    out.push_str("\nInsights\n");
    out.push_str(&format!(
        "  Weather impact: {} conditions contribute {}% to delay risk\n",
        report.assessment.dominant_condition, insights.weather_impact_pct
    ));
    out.push_str(&format!("  Travel day:     {}\n", insights.travel_day));
    out.push_str(&format!("  Season:         {}\n", insights.season));
    out.push_str(&format!("  Recommendation: {}\n", insights.recommendation));

    out
}

pub fn print_report(report: &FlightReport) {
    print!("{}", render_report(report));
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use flight_core::{Condition, DataSource, ForecastRecord, report::build_report};

    #[test]
    fn title_case_words() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("DELHI"), "Delhi");
    }

    #[test]
    fn renders_all_sections() {
        let forecast = ForecastRecord {
            temperature_c: 42.0,
            humidity_pct: 30.0,
            wind_speed_mps: 12.34,
            condition: Condition::Rain,
            forecast_time: Utc.with_ymd_and_hms(2025, 4, 5, 18, 0, 0).unwrap(),
        };
        // 2025-04-05 is a Saturday.
        let report = build_report(
            "new york",
            NaiveDate::from_ymd_opt(2025, 4, 5).unwrap(),
            DataSource::Mock,
            forecast,
        );

        let text = render_report(&report);

        assert!(text.contains("New York (JFK) on April 05, 2025"));
        assert!(text.contains("Delay risk: HIGH"));
        assert!(text.contains("Weather forecast (mock data)"));
        assert!(text.contains("12.3 m/s"));
        assert!(text.contains("• Weather: Rain"));
        assert!(text.contains("1. 🚨 HIGH delay risk"));
        assert!(text.contains("Rain conditions contribute 30% to delay risk"));
    }
}
