//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherReport;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== City category =====
    /// City input text changed
    CityChange(String),

    // ===== Weather category =====
    /// Intent: activate the trigger (Enter or click)
    WeatherFetch,

    /// Result: conditions loaded successfully
    WeatherDidLoad(WeatherReport),

    /// Result: request failed (transport, status or decode)
    WeatherDidError(String),

    // ===== Uncategorized (global) =====
    /// Force a re-render (cursor movement)
    Render,

    /// Exit the application
    Quit,
}
