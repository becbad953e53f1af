//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Current conditions for one city, as shown on screen
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub location_name: String,
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub cloud_cover: f64,
    pub description: String,
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self {
            location_name: "City Name".into(),
            temperature: 0.0,
            humidity: 0.0,
            wind_speed: 0.0,
            cloud_cover: 0.0,
            description: "Clear".into(),
        }
    }
}

impl WeatherReport {
    /// Temperature with one decimal place, e.g. `21.0°C`
    pub fn temperature_label(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    pub fn cloud_cover_label(&self) -> String {
        format!("{}%", self.cloud_cover)
    }

    pub fn humidity_label(&self) -> String {
        format!("{}%", self.humidity)
    }

    pub fn wind_speed_label(&self) -> String {
        format!("{} km/h", self.wind_speed)
    }
}

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, Default, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    /// City name as typed; kept across queries
    #[debug(section = "Query", label = "City", debug_fmt)]
    pub city: String,

    /// Last successfully fetched conditions
    #[debug(section = "Weather", label = "Report", debug_fmt)]
    pub weather: WeatherReport,

    /// True while a request is in flight; disables the trigger
    #[debug(section = "Weather", label = "Loading")]
    pub is_loading: bool,

    /// Most recent failure. Developer-facing only, never drawn in the main view.
    #[debug(section = "Weather", label = "Last error", debug_fmt)]
    pub last_error: Option<String>,
}

impl AppState {
    /// Create state with the given input text
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }

    /// Whether a submit would currently be accepted
    pub fn can_submit(&self) -> bool {
        !self.is_loading && !self.city.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_always_one_decimal() {
        let mut report = WeatherReport::default();
        report.temperature = 21.0;
        assert_eq!(report.temperature_label(), "21.0°C");
        report.temperature = 21.46;
        assert_eq!(report.temperature_label(), "21.5°C");
        report.temperature = -3.0;
        assert_eq!(report.temperature_label(), "-3.0°C");
    }

    #[test]
    fn test_tile_labels() {
        let report = WeatherReport {
            humidity: 55.0,
            wind_speed: 10.5,
            cloud_cover: 20.0,
            ..Default::default()
        };
        assert_eq!(report.cloud_cover_label(), "20%");
        assert_eq!(report.humidity_label(), "55%");
        assert_eq!(report.wind_speed_label(), "10.5 km/h");
    }

    #[test]
    fn test_can_submit() {
        assert!(!AppState::default().can_submit());
        assert!(!AppState::new("   ").can_submit());
        assert!(AppState::new("Paris").can_submit());

        let busy = AppState {
            is_loading: true,
            ..AppState::new("Paris")
        };
        assert!(!busy.can_submit());
    }
}
