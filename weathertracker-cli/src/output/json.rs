//! JSON output formatting.

use weathertracker_app::ForecastDayUi;

/// Formats forecast data as JSON for scripting.
#[derive(Debug)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serializes the forecast list.
    pub fn forecast(&self, days: &[ForecastDayUi]) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(days)
        } else {
            serde_json::to_string(days)
        }
    }

    /// Serializes one forecast day.
    pub fn detail(&self, day: &ForecastDayUi) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(day)
        } else {
            serde_json::to_string(day)
        }
    }
}
