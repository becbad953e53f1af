//! Forecast - current weather for a city, in the terminal
//!
//! This library exposes the app's modules for the binary and for tests.

pub mod action;
pub mod api;
pub mod components;
pub mod effect;
pub mod logging;
pub mod reducer;
pub mod state;
