use authdemo::state::{Field, Form};
use authdemo::LoginForm;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui_utils::{centered_rect, render_button, render_input, INPUT_HEIGHT};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 18;

#[derive(Debug)]
pub struct LoginPage;

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &LoginForm, accent: Color) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = Block::bordered().title(" Login ").border_style(Style::new().fg(accent));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [heading, _, email, password, _, button, _, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from("Welcome Back").bold(),
                Line::from("Login to your account").gray(),
            ]),
            heading,
        );

        let focused = form.focused_field();
        for (field, value, slot) in [
            (Field::Email, form.email.as_str(), email),
            (Field::Password, form.password.as_str(), password),
        ] {
            render_input(
                frame,
                slot,
                field.label(),
                value,
                field.is_secret(),
                focused == field,
                form.errors.get(field),
                accent,
            );
        }

        render_button(frame, button, "Login", accent);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Don't have an account? ").gray(),
                Span::styled("Ctrl+R", Style::new().bold().fg(accent)),
                Span::raw(" to sign up").gray(),
            ]))
            .centered(),
            hint,
        );
    }
}
