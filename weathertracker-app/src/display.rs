//! Display projection of the domain model.
//!
//! Everything the rendering surface shows is preformatted here so the
//! state the view-models publish is already display-ready.

use chrono::{DateTime, Utc};
use serde::Serialize;
use weathertracker_core::ForecastDay;

/// Base URL for condition icons.
const ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// A forecast day with every field formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDayUi {
    /// Record identity, unchanged from the domain model.
    pub id: String,
    /// Formatted date, e.g. `"Fri, 03 Nov"`.
    pub date: String,
    /// Daytime temperature, e.g. `"20.0°C"`.
    pub temp_day: String,
    /// Minimum temperature.
    pub temp_min: String,
    /// Maximum temperature.
    pub temp_max: String,
    /// Humidity, e.g. `"65%"`.
    pub humidity: String,
    /// Wind speed, e.g. `"5.0 m/s"`.
    pub wind_speed: String,
    /// Capitalized condition description.
    pub description: String,
    /// Full icon URL.
    pub icon_url: String,
}

impl ForecastDayUi {
    /// Projects one domain record.
    pub fn from_day(day: &ForecastDay) -> Self {
        Self {
            id: day.id.clone(),
            date: format_date(day.date),
            temp_day: format_temperature(day.temp_day),
            temp_min: format_temperature(day.temp_min),
            temp_max: format_temperature(day.temp_max),
            humidity: format!("{}%", day.humidity),
            wind_speed: format!("{:.1} m/s", day.wind_speed),
            description: capitalize(&day.description),
            icon_url: format!("{ICON_BASE_URL}/{}@2x.png", day.icon),
        }
    }

    /// Projects a list of domain records, preserving order.
    pub fn from_days(days: &[ForecastDay]) -> Vec<Self> {
        days.iter().map(Self::from_day).collect()
    }
}

fn format_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|date| date.format("%a, %d %b").to_string())
        .unwrap_or_default()
}

fn format_temperature(temp: f64) -> String {
    format!("{temp:.1}°C")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> ForecastDay {
        ForecastDay {
            id: "1699000000_0".to_string(),
            date: 1_699_000_000, // 2023-11-03 UTC
            temp_day: 20.04,
            temp_min: 15.0,
            temp_max: 25.55,
            humidity: 65,
            wind_speed: 5.0,
            description: "partly cloudy".to_string(),
            icon: "02d".to_string(),
        }
    }

    #[test]
    fn test_projection_formats_every_field() {
        let ui = ForecastDayUi::from_day(&day());

        assert_eq!(ui.id, "1699000000_0");
        assert_eq!(ui.date, "Fri, 03 Nov");
        assert_eq!(ui.temp_day, "20.0°C");
        assert_eq!(ui.temp_min, "15.0°C");
        assert_eq!(ui.temp_max, "25.6°C");
        assert_eq!(ui.humidity, "65%");
        assert_eq!(ui.wind_speed, "5.0 m/s");
        assert_eq!(ui.description, "Partly cloudy");
        assert_eq!(
            ui.icon_url,
            "https://openweathermap.org/img/wn/02d@2x.png"
        );
    }

    #[test]
    fn test_empty_description_stays_empty() {
        let mut plain = day();
        plain.description = String::new();
        assert_eq!(ForecastDayUi::from_day(&plain).description, "");
    }

    #[test]
    fn test_list_projection_preserves_order() {
        let mut second = day();
        second.id = "1699086400_1".to_string();

        let ui = ForecastDayUi::from_days(&[day(), second]);
        assert_eq!(ui.len(), 2);
        assert_eq!(ui[0].id, "1699000000_0");
        assert_eq!(ui[1].id, "1699086400_1");
    }
}
