//! Render tests using RenderHarness
//!
//! Each component is drawn into a test buffer and checked as plain text.

use forecast::{
    components::{
        Component, Headline, HeadlineProps, InfoTile, InfoTileProps, TitleBanner,
        TitleBannerProps, WeatherApp, WeatherAppProps,
        weather_app::{MIN_HEIGHT, MIN_WIDTH},
    },
    state::{AppState, WeatherReport},
};
use tui_dispatch::testing::*;

#[test]
fn test_render_headline() {
    let mut render = RenderHarness::new(40, 3);
    let mut component = Headline;
    let report = WeatherReport {
        location_name: "Reykjavik".into(),
        temperature: 3.0,
        description: "partly cloudy".into(),
        ..Default::default()
    };

    let output = render.render_to_string_plain(|frame| {
        component.render(frame, frame.area(), HeadlineProps { report: &report });
    });

    assert!(output.contains("Reykjavik"));
    assert!(output.contains("3.0°C"));
    assert!(output.contains("Partly Cloudy"));
}

#[test]
fn test_render_info_tile() {
    let mut render = RenderHarness::new(20, 5);
    let mut component = InfoTile;

    let output = render.render_to_string_plain(|frame| {
        component.render(
            frame,
            frame.area(),
            InfoTileProps {
                icon: "*",
                value: "55%",
                label: "Humidity",
            },
        );
    });

    assert!(output.contains("55%"));
    assert!(output.contains("Humidity"));
    assert!(output.contains('*'));
}

#[test]
fn test_render_title_banner_subtitle() {
    let mut render = RenderHarness::new(60, 8);
    let mut component = TitleBanner;

    let output = render.render_to_string_plain(|frame| {
        component.render(frame, frame.area(), TitleBannerProps::default());
    });

    assert!(output.contains("Enter a city to get the current weather"));
}

#[test]
fn test_render_placeholder_when_city_empty() {
    let mut render = RenderHarness::new(70, 30);
    let mut component = WeatherApp::new();
    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Enter city name"), "Should show placeholder");
    assert!(output.contains("Search"), "Should show the idle trigger");
}

#[test]
fn test_render_typed_city() {
    let mut render = RenderHarness::new(70, 30);
    let mut component = WeatherApp::new();
    let state = AppState::new("Buenos Aires");

    let output = render.render_to_string_plain(|frame| {
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Buenos Aires"));
    assert!(!output.contains("Enter city name"));
}

#[test]
fn test_render_help_bar() {
    let mut render = RenderHarness::new(80, 30);
    let mut component = WeatherApp::new();
    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("search"), "Should show search hint");
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_at_minimum_size_keeps_labels_whole() {
    let mut render = RenderHarness::new(MIN_WIDTH, MIN_HEIGHT);
    let mut component = WeatherApp::new();
    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(!output.contains("Terminal too small"), "output:\n{output}");
    for text in [
        "Cloud Cover",
        "Humidity",
        "Wind Speed",
        "Enter a city to get the current weather",
        "City Name",
        "0.0°C",
        "Search",
    ] {
        assert!(output.contains(text), "{text:?} should be whole in:\n{output}");
    }
}

#[test]
fn test_render_one_column_short_shows_notice() {
    let mut render = RenderHarness::new(MIN_WIDTH - 1, MIN_HEIGHT);
    let mut component = WeatherApp::new();
    let state = AppState::default();

    let output = render.render_to_string_plain(|frame| {
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Terminal too small"));
}

#[test]
fn test_render_small_terminal_shows_notice() {
    let mut render = RenderHarness::new(20, 6);
    let mut component = WeatherApp::new();
    let state = AppState::new("Lima");

    let output = render.render_to_string_plain(|frame| {
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    });

    assert!(output.contains("Terminal too small"));
    assert!(!output.contains("Lima"));
}
