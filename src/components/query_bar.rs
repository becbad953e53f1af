use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{BaseStyle, Padding, TextInput, TextInputProps, TextInputStyle};

use super::Component;
use crate::action::Action;

pub const PLACEHOLDER: &str = "Enter city name";
pub const TRIGGER_LABEL: &str = "Search";
pub const TRIGGER_BUSY_LABEL: &str = "Loading...";

/// Rows the query bar needs
pub const QUERY_BAR_HEIGHT: u16 = 3;
const TRIGGER_WIDTH: u16 = 14;

const INPUT_BG: Color = Color::Rgb(50, 50, 60);
const TRIGGER_BG: Color = Color::Rgb(70, 90, 160);
const TRIGGER_DISABLED_BG: Color = Color::Rgb(45, 45, 55);

/// City input with the fetch trigger to its right.
///
/// Enter in the input and a left click on the trigger both emit
/// `on_submit`. While `is_loading` the trigger is disabled and ignores
/// clicks.
pub struct QueryBar {
    input: TextInput,
    trigger_area: Rect,
}

pub struct QueryBarProps<'a> {
    pub city: &'a str,
    pub is_loading: bool,
    pub is_focused: bool,
    // Action constructors
    pub on_change: fn(String) -> Action,
    pub on_submit: fn(String) -> Action,
}

impl Default for QueryBar {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
            trigger_area: Rect::default(),
        }
    }
}

impl QueryBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the trigger was last drawn
    pub fn trigger_area(&self) -> Rect {
        self.trigger_area
    }

    /// Forget the trigger's hit area when it is not drawn
    pub fn clear_area(&mut self) {
        self.trigger_area = Rect::default();
    }

    pub fn trigger_label(is_loading: bool) -> &'static str {
        if is_loading {
            TRIGGER_BUSY_LABEL
        } else {
            TRIGGER_LABEL
        }
    }

    fn input_props<'a>(props: &QueryBarProps<'a>, is_focused: bool) -> TextInputProps<'a, Action> {
        TextInputProps {
            value: props.city,
            placeholder: PLACEHOLDER,
            is_focused,
            style: TextInputStyle {
                base: BaseStyle {
                    border: None,
                    padding: Padding::all(1),
                    bg: Some(INPUT_BG),
                    fg: None,
                },
                placeholder_style: None,
                cursor_style: None,
            },
            on_change: props.on_change,
            on_submit: props.on_submit,
            on_cursor_move: Some(|_| Action::Render),
        }
    }

    fn render_trigger(&mut self, frame: &mut Frame, area: Rect, is_loading: bool) {
        self.trigger_area = area;

        let (bg, label_style) = if is_loading {
            (TRIGGER_DISABLED_BG, Style::default().fg(Color::DarkGray))
        } else {
            (
                TRIGGER_BG,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        };

        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);
        let label = Line::styled(Self::trigger_label(is_loading), label_style).centered();
        frame.render_widget(Paragraph::new(label), rows[1]);
    }
}

impl Component<Action> for QueryBar {
    type Props<'a> = QueryBarProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        match event {
            EventKind::Mouse(mouse) => {
                let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                    && self
                        .trigger_area
                        .contains(Position::new(mouse.column, mouse.row));
                if clicked && !props.is_loading {
                    vec![(props.on_submit)(props.city.to_string())]
                } else {
                    Vec::new()
                }
            }
            EventKind::Key(_) => {
                let input_props = Self::input_props(&props, true);
                self.input
                    .handle_event(event, input_props)
                    .into_iter()
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::horizontal([
            Constraint::Min(10),               // Input
            Constraint::Length(1),             // Gap
            Constraint::Length(TRIGGER_WIDTH), // Trigger
        ])
        .split(area);

        let input_props = Self::input_props(&props, props.is_focused);
        self.input.render(frame, chunks[0], input_props);

        self.render_trigger(frame, chunks[2], props.is_loading);
    }
}
