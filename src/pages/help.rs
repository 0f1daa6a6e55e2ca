use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use crate::ui_utils::centered_rect;

#[derive(Debug)]
pub struct HelpPage;

impl Default for HelpPage {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 20, area);
        frame.render_widget(Clear, overlay);
        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), overlay);

        let sections = Layout::vertical([
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(overlay);

        let key = |k: &'static str, what: &'static str| {
            Line::from(vec![
                Span::styled(format!("{:<14}", k), Style::new().bold().cyan()),
                Span::raw(what),
            ])
        };

        let form_help = vec![
            key("Tab / ↓", "Next field"),
            key("Shift+Tab / ↑", "Previous field"),
            key("Enter", "Submit the form"),
            key("Ctrl+R", "Switch between Login and Register"),
            key("Backspace", "Delete last character"),
            key("Ctrl+C", "Quit"),
        ];
        frame.render_widget(
            Paragraph::new(form_help).block(Block::bordered().title("Forms")),
            sections[0],
        );

        let dashboard_help = vec![
            key("l", "Logout"),
            key("q / Ctrl+C", "Quit"),
            key("F1 / Esc", "Close this help"),
        ];
        frame.render_widget(
            Paragraph::new(dashboard_help).block(Block::bordered().title("Dashboard")),
            sections[1],
        );

        let tips = vec![
            Line::from(vec![
                Span::styled("Users", Style::new().bold().yellow()),
                Span::raw(" live in memory and are gone when you quit"),
            ]),
            Line::from(vec![
                Span::styled("Strength", Style::new().bold().yellow()),
                Span::raw(" length 8+, mixed case, digit, symbol"),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[2],
        );
    }
}
