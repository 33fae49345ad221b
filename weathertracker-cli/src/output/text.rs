//! Text output formatting.

use weathertracker_app::ForecastDayUi;

/// Formats forecast data for terminal display.
#[derive(Debug, Default)]
pub struct TextFormatter;

impl TextFormatter {
    /// Creates a text formatter.
    pub fn new() -> Self {
        Self
    }

    /// Formats the forecast list as an aligned table.
    pub fn forecast_table(&self, days: &[ForecastDayUi]) -> String {
        if days.is_empty() {
            return "No forecast data cached. Configure an API key and refresh.\n".to_string();
        }

        let mut out = String::new();
        out.push_str(&format!(
            "{:<13} {:>8} {:>8} {:>8} {:>6} {:>9}  {}\n",
            "Date", "Day", "Min", "Max", "Hum", "Wind", "Conditions"
        ));
        out.push_str(&format!("{}\n", "─".repeat(72)));
        for day in days {
            out.push_str(&format!(
                "{:<13} {:>8} {:>8} {:>8} {:>6} {:>9}  {}\n",
                day.date,
                day.temp_day,
                day.temp_min,
                day.temp_max,
                day.humidity,
                day.wind_speed,
                day.description,
            ));
        }
        out
    }

    /// Formats one forecast day as a detail card.
    pub fn detail_card(&self, day: &ForecastDayUi) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}  {}\n", day.date, day.description));
        out.push_str(&format!("{}\n", "─".repeat(40)));
        out.push_str(&format!("{:<12} {}\n", "Day", day.temp_day));
        out.push_str(&format!("{:<12} {}\n", "Min", day.temp_min));
        out.push_str(&format!("{:<12} {}\n", "Max", day.temp_max));
        out.push_str(&format!("{:<12} {}\n", "Humidity", day.humidity));
        out.push_str(&format!("{:<12} {}\n", "Wind", day.wind_speed));
        out.push_str(&format!("{:<12} {}\n", "Icon", day.icon_url));
        out
    }

    /// Formats an error banner.
    pub fn error_banner(&self, message: &str) -> String {
        format!("⚠ {message}\n")
    }
}
