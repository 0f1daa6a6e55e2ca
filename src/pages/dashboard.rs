use authdemo::User;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui_utils::{centered_rect, render_button};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 17;

#[derive(Debug)]
pub struct Dashboard;

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        user: &User,
        banner: Option<&str>,
        accent: Color,
    ) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = Block::bordered().title(" Dashboard ").border_style(Style::new().fg(accent));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [header, _, banner_area, info, _, button, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from("Dashboard").bold().fg(accent),
                Line::from("Welcome to your account").gray(),
            ]),
            header,
        );

        if let Some(msg) = banner {
            frame.render_widget(
                Paragraph::new(Line::from(msg).centered())
                    .style(Style::new().fg(Color::White).bg(Color::Green))
                    .block(Block::bordered().border_style(Style::new().green())),
                banner_area,
            );
        }

        let row = |label: &'static str, value: String| {
            Line::from(vec![
                Span::styled(format!("{:<14}", label), Style::new().gray()),
                Span::styled(value, Style::new().bold()),
            ])
        };
        let details = vec![
            row("Name:", user.name.clone()),
            row("Email:", user.email.clone()),
            row("Member Since:", user.join_date_display()),
        ];
        frame.render_widget(
            Paragraph::new(details).block(Block::bordered().title("Account Information")),
            info,
        );

        render_button(frame, button, "Logout (l)", Color::Red);

        frame.render_widget(
            Paragraph::new(Line::from("l: Logout   q: Quit").gray()).centered(),
            hint,
        );
    }
}
