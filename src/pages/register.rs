use authdemo::state::{Field, Form};
use authdemo::RegisterForm;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};

use crate::ui_utils::{centered_rect, render_button, render_input, INPUT_HEIGHT};

const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 28;

#[derive(Debug)]
pub struct RegisterPage;

impl Default for RegisterPage {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &RegisterForm, accent: Color) {
        let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
        let block = Block::bordered().title(" Register ").border_style(Style::new().fg(accent));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [heading, _, name, email, password, strength, confirm, button, _, hint] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(2),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .areas(inner);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from("Create Account").bold(),
                Line::from("Sign up to get started").gray(),
            ]),
            heading,
        );

        let focused = form.focused_field();
        for (field, value, slot) in [
            (Field::Name, form.name.as_str(), name),
            (Field::Email, form.email.as_str(), email),
            (Field::Password, form.password.as_str(), password),
            (Field::ConfirmPassword, form.confirm_password.as_str(), confirm),
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

        // Only shown while a password is typed
        if let Some(level) = form.strength_indicator() {
            let [bar, label] =
                Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(strength);
            frame.render_widget(
                Gauge::default()
                    .gauge_style(Style::new().fg(level.color()).bg(Color::DarkGray))
                    .percent(level.width_percent())
                    .label(""),
                bar,
            );
            frame.render_widget(
                Paragraph::new(Span::styled(level.label(), Style::new().fg(level.color()))),
                label,
            );
        }

        render_button(frame, button, "Create Account", accent);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("Already have an account? ").gray(),
                Span::styled("Ctrl+R", Style::new().bold().fg(accent)),
                Span::raw(" to login").gray(),
            ]))
            .centered(),
            hint,
        );
    }
}
