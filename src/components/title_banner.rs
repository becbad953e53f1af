use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;

pub const TITLE: &str = "Weather Forecast";
pub const SUBTITLE: &str = "Enter a city to get the current weather";

/// Big gradient title with a one-line subtitle underneath
pub struct TitleBanner;

pub struct TitleBannerProps<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

impl Default for TitleBannerProps<'_> {
    fn default() -> Self {
        Self {
            title: TITLE,
            subtitle: SUBTITLE,
        }
    }
}

fn title_fill() -> Fill {
    // Blue into purple
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(96, 165, 250),
        ArtColor::rgb(168, 85, 247),
    ))
}

impl Component<Action> for TitleBanner {
    type Props<'a> = TitleBannerProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Fill(1),   // FIGlet title, falls back to plain text
            Constraint::Length(1), // Subtitle
        ])
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(title_fill());
        frame.render_widget(ArtBox::new(&renderer, props.title), chunks[0]);

        let subtitle = Line::from(vec![Span::styled(
            props.subtitle,
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(subtitle), chunks[1]);
    }
}
