use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};

use super::Component;
use crate::action::Action;

pub const CLOUD_ICON: &str = "\u{2601}";
pub const HUMIDITY_ICON: &str = "\u{1f4a7}";
pub const WIND_ICON: &str = "\u{1f32c}";

/// Rows a tile needs: border + icon + value + label + border
pub const TILE_HEIGHT: u16 = 5;

/// One summary tile: icon, value, label
pub struct InfoTile;

pub struct InfoTileProps<'a> {
    pub icon: &'a str,
    pub value: &'a str,
    pub label: &'a str,
}

impl Component<Action> for InfoTile {
    type Props<'a> = InfoTileProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Rgb(90, 90, 120)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

        frame.render_widget(Paragraph::new(Line::from(props.icon).centered()), rows[0]);
        frame.render_widget(
            Paragraph::new(
                Line::styled(
                    props.value,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
                .centered(),
            ),
            rows[1],
        );
        frame.render_widget(
            Paragraph::new(Line::styled(props.label, Style::default().fg(Color::Gray)).centered()),
            rows[2],
        );
    }
}
