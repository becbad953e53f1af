//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== City actions =====
        Action::CityChange(city) => {
            if state.city == city {
                return DispatchResult::unchanged();
            }
            state.city = city;
            DispatchResult::changed()
        }

        // ===== Weather actions =====
        Action::WeatherFetch => {
            // Blank input and a busy trigger are both silent no-ops.
            if !state.can_submit() {
                return DispatchResult::unchanged();
            }
            state.is_loading = true;
            DispatchResult::changed_with(Effect::FetchWeather {
                city: state.city.clone(),
            })
        }

        Action::WeatherDidLoad(report) => {
            state.weather = report;
            state.is_loading = false;
            state.last_error = None;
            DispatchResult::changed()
        }

        Action::WeatherDidError(msg) => {
            // Keep the previous report on screen.
            state.is_loading = false;
            state.last_error = Some(msg);
            DispatchResult::changed()
        }

        // ===== Global actions =====
        Action::Render => DispatchResult::changed(),

        Action::Quit => DispatchResult::unchanged(),
    }
}
