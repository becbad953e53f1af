use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::headline::HEADLINE_HEIGHT;
use super::info_tile::{CLOUD_ICON, HUMIDITY_ICON, TILE_HEIGHT, WIND_ICON};
use super::query_bar::QUERY_BAR_HEIGHT;
use super::{
    Component, Headline, HeadlineProps, InfoTile, InfoTileProps, QueryBar, QueryBarProps,
    TitleBanner, TitleBannerProps,
};
use crate::action::Action;
use crate::state::AppState;

/// Title can grow up to a FIGlet font plus the subtitle row.
const BANNER_MAX: u16 = 8;
/// One plain title row plus the subtitle row.
const BANNER_MIN: u16 = 2;
/// Query bar, headline and tiles with the blank rows between them.
const BODY_HEIGHT: u16 = QUERY_BAR_HEIGHT + HEADLINE_HEIGHT + TILE_HEIGHT + 3;
const CONTENT_WIDTH: u16 = 64;
/// Three tiles wide enough for "Cloud Cover" inside their borders.
pub const MIN_WIDTH: u16 = 44;
/// Body, smallest banner and the help bar.
pub const MIN_HEIGHT: u16 = BODY_HEIGHT + BANNER_MIN + 1;
pub const TOO_SMALL: &str = "Terminal too small";

/// Props for WeatherApp - read-only view of state
pub struct WeatherAppProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The single weather view: title, query bar, headline and tiles
#[derive(Default)]
pub struct WeatherApp {
    query: QueryBar,
}

impl WeatherApp {
    pub fn new() -> Self {
        Self::default()
    }

    fn query_props(state: &AppState, is_focused: bool) -> QueryBarProps<'_> {
        QueryBarProps {
            city: &state.city,
            is_loading: state.is_loading,
            is_focused,
            on_change: Action::CityChange,
            on_submit: |_| Action::WeatherFetch,
        }
    }

    fn render_tiles(frame: &mut Frame, area: Rect, state: &AppState) {
        let columns = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .spacing(1)
        .split(area);

        let report = &state.weather;
        let tiles = [
            (CLOUD_ICON, report.cloud_cover_label(), "Cloud Cover"),
            (HUMIDITY_ICON, report.humidity_label(), "Humidity"),
            (WIND_ICON, report.wind_speed_label(), "Wind Speed"),
        ];

        let mut tile = InfoTile;
        for ((icon, value, label), column) in tiles.iter().zip(columns.iter()) {
            tile.render(
                frame,
                *column,
                InfoTileProps {
                    icon,
                    value,
                    label,
                },
            );
        }
    }
}

impl Component<Action> for WeatherApp {
    type Props<'a> = WeatherAppProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        if let EventKind::Key(key) = event {
            let ctrl_c =
                key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c');
            if key.code == KeyCode::Esc || ctrl_c {
                return vec![Action::Quit];
            }
        }

        self.query
            .handle_event(event, Self::query_props(props.state, true))
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: WeatherAppProps<'_>) {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            // No trigger on screen, so nothing to click.
            self.query.clear_area();
            let msg = Line::styled(TOO_SMALL, Style::default().fg(Color::DarkGray)).centered();
            frame.render_widget(Paragraph::new(msg), area);
            return;
        }

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        let [content] = Layout::horizontal([Constraint::Max(CONTENT_WIDTH)])
            .flex(Flex::Center)
            .areas(chunks[0]);

        let banner_height = content
            .height
            .saturating_sub(BODY_HEIGHT)
            .clamp(BANNER_MIN, BANNER_MAX);
        let rows = Layout::vertical([
            Constraint::Length(banner_height),
            Constraint::Length(1),
            Constraint::Length(QUERY_BAR_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(HEADLINE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(TILE_HEIGHT),
        ])
        .flex(Flex::Center)
        .split(content);

        let mut banner = TitleBanner;
        banner.render(frame, rows[0], TitleBannerProps::default());

        self.query.render(
            frame,
            rows[2],
            Self::query_props(props.state, props.is_focused),
        );

        let mut headline = Headline;
        headline.render(
            frame,
            rows[4],
            HeadlineProps {
                report: &props.state.weather,
            },
        );

        Self::render_tiles(frame, rows[6], props.state);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("enter", "search"),
                    StatusBarHint::new("esc", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::WeatherReport;
    use tui_dispatch::testing::*;

    #[test]
    fn test_handle_event_typing() {
        let mut component = WeatherApp::new();
        let state = AppState::default();
        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("l")), props)
            .into_iter()
            .collect();
        actions.assert_count(1);
        actions.assert_first(Action::CityChange("l".into()));
    }

    #[test]
    fn test_handle_event_quit() {
        let mut component = WeatherApp::new();
        let state = AppState::default();

        for k in ["esc", "ctrl+c"] {
            let props = WeatherAppProps {
                state: &state,
                is_focused: true,
            };
            let actions: Vec<_> = component
                .handle_event(&EventKind::Key(key(k)), props)
                .into_iter()
                .collect();
            actions.assert_first(Action::Quit);
        }
    }

    #[test]
    fn test_handle_event_unfocused_ignores() {
        let mut component = WeatherApp::new();
        let state = AppState::new("Paris");
        let props = WeatherAppProps {
            state: &state,
            is_focused: false,
        };

        let actions: Vec<_> = component
            .handle_event(&EventKind::Key(key("enter")), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    fn left_click(column: u16, row: u16) -> EventKind {
        EventKind::Mouse(crossterm::event::MouseEvent {
            kind: crossterm::event::MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_click_after_shrink_does_nothing() {
        let mut component = WeatherApp::new();
        let state = AppState::new("Paris");

        let mut render = RenderHarness::new(70, 30);
        render.render_to_string_plain(|frame| {
            let props = WeatherAppProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });
        let trigger = component.query.trigger_area();
        assert!(trigger.width > 0);

        let mut small = RenderHarness::new(20, 6);
        small.render_to_string_plain(|frame| {
            let props = WeatherAppProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        let props = WeatherAppProps {
            state: &state,
            is_focused: true,
        };
        let actions: Vec<_> = component
            .handle_event(&left_click(trigger.x + 1, trigger.y + 1), props)
            .into_iter()
            .collect();
        actions.assert_empty();
    }

    #[test]
    fn test_render_initial_report() {
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

        assert!(output.contains("City Name"));
        assert!(output.contains("0.0°C"));
        assert!(output.contains("Clear"));
    }

    #[test]
    fn test_render_report() {
        let mut render = RenderHarness::new(70, 30);
        let mut component = WeatherApp::new();
        let state = AppState {
            weather: WeatherReport {
                location_name: "Oslo".into(),
                temperature: -4.25,
                humidity: 80.0,
                wind_speed: 3.5,
                cloud_cover: 100.0,
                description: "light snow".into(),
            },
            ..AppState::new("Oslo")
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherAppProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        });

        assert!(output.contains("-4.2°C") || output.contains("-4.3°C"));
        assert!(output.contains("Light Snow"));
        assert!(output.contains("100%"));
        assert!(output.contains("80%"));
        assert!(output.contains("3.5 km/h"));
    }
}
