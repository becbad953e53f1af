use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::state::WeatherReport;

/// Location name, temperature and description
pub struct Headline;

pub struct HeadlineProps<'a> {
    pub report: &'a WeatherReport,
}

/// Rows the headline needs
pub const HEADLINE_HEIGHT: u16 = 3;

/// Upper-case the first letter of every word
fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Component<Action> for Headline {
    type Props<'a> = HeadlineProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Location
            Constraint::Length(1), // Temperature
            Constraint::Length(1), // Description
        ])
        .split(area);

        let location = Line::from(vec![Span::styled(
            props.report.location_name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(location), chunks[0]);

        let temperature = Line::from(vec![Span::styled(
            props.report.temperature_label(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(temperature), chunks[1]);

        let description = Line::from(vec![Span::styled(
            capitalize_words(&props.report.description),
            Style::default().fg(Color::Gray),
        )])
        .centered();
        frame.render_widget(Paragraph::new(description), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("partly cloudy"), "Partly Cloudy");
        assert_eq!(capitalize_words("Sunny"), "Sunny");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("light  rain"), "Light  Rain");
    }
}
