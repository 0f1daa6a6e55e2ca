use authdemo::{AuthState, Theme, View};
use ratatui::{
    layout::{Constraint, Layout},
    style::Stylize,
    text::Line,
    widgets::Block,
    Frame,
};

use crate::pages::dashboard::Dashboard;
use crate::pages::help::HelpPage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::ui_utils::accent;

#[derive(Debug)]
pub struct Screen {
    login: LoginPage,
    register: RegisterPage,
    dashboard: Dashboard,
    help: HelpPage,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            login: LoginPage::new(),
            register: RegisterPage::new(),
            dashboard: Dashboard::new(),
            help: HelpPage::new(),
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        auth: &AuthState,
        status: &str,
        show_help: bool,
        theme: Theme,
    ) {
        let accent = accent(theme);
        let area = frame.area();
        let title = Line::from("authdemo - Account Access").bold().fg(accent).left_aligned();
        let block = Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Split into main content and bottom status bar
        let [content, status_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner_area);

        match auth.view() {
            View::Login => self.login.render(frame, content, &auth.login, accent),
            View::Register => self.register.render(frame, content, &auth.register, accent),
            View::Dashboard => {
                if let Some(user) = auth.current_user() {
                    self.dashboard
                        .render(frame, content, user, auth.success_message(), accent);
                }
            }
        }

        if show_help {
            self.help.render(frame, content);
        }

        let status_line = Line::from(format!("{}  |  F1: Help  Ctrl+C: Quit", status))
            .on_dark_gray()
            .white();
        frame.render_widget(status_line, status_area);
    }
}
