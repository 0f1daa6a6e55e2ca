use std::path::PathBuf;
use std::time::Duration;

use authdemo::state::Form;
use authdemo::{logging, status_symbols, AuthState, BannerTimer, Config, View};
use ratatui::{DefaultTerminal, Frame};

pub mod key_handler;
pub mod pages;
pub mod screen;
pub mod ui_utils;
use key_handler::{ActionContext, ActionProcessor, Command, KeyAction, KeyHandler};
use screen::Screen;

/// How long the loop waits for input before redrawing.
const TICK: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cwd = std::env::current_dir()?;
    let config_arg = std::env::args_os().nth(1).map(PathBuf::from);
    let config = Config::resolve(config_arg.as_deref(), &cwd)?;
    logging::init(&config)?;

    let terminal = ratatui::init();
    let result = App::new(config).run(terminal);
    ratatui::restore();
    result
}

pub struct App {
    running: bool,
    screen: Screen,
    key_handler: KeyHandler,
    auth: AuthState,
    config: Config,
    banner: BannerTimer,
    show_help: bool,
    status_message: String,
}

impl App {
    pub fn new(config: Config) -> Self {
        let mut app = Self {
            running: false,
            screen: Screen::new(),
            key_handler: KeyHandler::new(),
            auth: AuthState::new(),
            config,
            banner: BannerTimer::new(),
            show_help: false,
            status_message: String::new(),
        };
        app.update_status_message();
        app
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        tracing::info!("session started");
        while self.running {
            if self.banner.poll_expired() {
                self.auth.clear_success_message();
            }
            terminal.draw(|frame| self.render(frame))?;
            let action = self.key_handler.handle_crossterm_events(TICK)?;
            if self.handle_action(action) {
                self.quit();
            }
        }
        tracing::info!(users = self.auth.directory().len(), "session ended");
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.screen.render(
            frame,
            &self.auth,
            &self.status_message,
            self.show_help,
            self.config.theme,
        );
    }

    fn update_status_message(&mut self) {
        self.status_message = match self.auth.view() {
            View::Login => "Login (Tab: Next field, ↵ Login, Ctrl+R: Sign up)".to_string(),
            View::Register => {
                "Register (Tab: Next field, ↵ Create account, Ctrl+R: Login)".to_string()
            }
            View::Dashboard => format!(
                "Signed in as {} (l Logout, q Quit)",
                self.auth
                    .current_user()
                    .map(|u| u.email.as_str())
                    .unwrap_or("N/A")
            ),
        };
    }

    /// Returns `true` when the app should quit.
    fn handle_action(&mut self, action: KeyAction) -> bool {
        if action == KeyAction::None {
            return false;
        }

        let ctx = ActionContext {
            view: self.auth.view(),
            show_help: self.show_help,
        };

        match ActionProcessor::process(action, &ctx) {
            Command::Quit => return true,
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::CloseHelp => self.show_help = false,
            Command::FocusNext => self.with_form(|form| form.focus_next()),
            Command::FocusPrev => self.with_form(|form| form.focus_prev()),
            Command::InsertChar(c) => self.with_form(|form| form.push_char(c)),
            Command::DeleteChar => self.with_form(|form| {
                form.pop_char();
            }),
            Command::ShowRegister => {
                self.auth.show_register();
                self.update_status_message();
            }
            Command::ShowLogin => {
                self.auth.show_login();
                self.update_status_message();
            }
            Command::SubmitLogin => {
                let accepted = self.auth.submit_login();
                self.after_submit(accepted, self.auth.login.errors.len());
            }
            Command::SubmitRegister => {
                let today = chrono::Local::now().date_naive();
                let accepted = self.auth.submit_register(today);
                self.after_submit(accepted, self.auth.register.errors.len());
            }
            Command::Logout => {
                if self.auth.logout() {
                    self.update_status_message();
                    self.status_message = status_symbols::info("Logged out");
                }
            }
            Command::None => {}
        }
        false
    }

    /// Runs `f` against the form of the current view, if any.
    fn with_form(&mut self, f: impl FnOnce(&mut dyn Form)) {
        match self.auth.view() {
            View::Login => f(&mut self.auth.login),
            View::Register => f(&mut self.auth.register),
            View::Dashboard => {}
        }
    }

    fn after_submit(&mut self, accepted: bool, error_count: usize) {
        if accepted {
            self.banner.schedule(self.config.banner_timeout());
            self.update_status_message();
            if let Some(msg) = self.auth.success_message() {
                self.status_message = status_symbols::success(msg);
            }
        } else {
            self.status_message = status_symbols::rejected(error_count);
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use authdemo::state::{Field, FieldError};

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_action(KeyAction::InputChar(c));
        }
    }

    fn register(app: &mut App, name: &str, email: &str, pw: &str, confirm: &str) {
        app.handle_action(KeyAction::SwitchForm);
        for value in [name, email, pw, confirm] {
            type_text(app, value);
            app.handle_action(KeyAction::NextField);
        }
        app.handle_action(KeyAction::Submit);
    }

    #[test]
    fn starts_on_login() {
        let app = App::new(Config::default());
        assert_eq!(app.auth.view(), View::Login);
        assert!(app.status_message.starts_with("Login"));
    }

    #[test]
    fn register_login_logout_round() {
        let mut app = App::new(Config::default());
        register(&mut app, "Alice", "alice@example.com", "Secret1!", "Secret1!");
        assert_eq!(app.auth.view(), View::Dashboard);
        assert_eq!(app.status_message, "✓ Account created successfully!");
        assert!(app.banner.has_pending());

        app.handle_action(KeyAction::InputChar('l'));
        assert_eq!(app.auth.view(), View::Login);
        assert_eq!(app.status_message, "ℹ Logged out");

        type_text(&mut app, "alice@example.com");
        app.handle_action(KeyAction::NextField);
        type_text(&mut app, "Secret1!");
        app.handle_action(KeyAction::Submit);
        assert_eq!(app.auth.view(), View::Dashboard);
        assert_eq!(app.auth.current_user().unwrap().name, "Alice");
    }

    #[test]
    fn enter_on_dashboard_keeps_session() {
        let mut app = App::new(Config::default());
        register(&mut app, "Alice", "alice@example.com", "Secret1!", "Secret1!");
        app.handle_action(KeyAction::Submit);
        assert_eq!(app.auth.view(), View::Dashboard);
        assert!(app.auth.current_user().is_some());
    }

    #[test]
    fn rejected_submit_reports_count() {
        let mut app = App::new(Config::default());
        register(&mut app, "A", "nope", "abc", "abd");
        assert_eq!(app.auth.view(), View::Register);
        assert_eq!(app.status_message, "✗ 4 fields need attention");
        assert_eq!(
            app.auth.register.errors.get(Field::Name),
            Some(FieldError::NameTooShort)
        );
    }

    #[test]
    fn typing_q_in_form_does_not_quit() {
        let mut app = App::new(Config::default());
        assert!(!app.handle_action(KeyAction::InputChar('q')));
        assert_eq!(app.auth.login.email, "q");
        assert!(app.handle_action(KeyAction::Quit));
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut app = App::new(Config::default());
        type_text(&mut app, "ab");
        app.handle_action(KeyAction::Backspace);
        assert_eq!(app.auth.login.email, "a");
    }

    #[test]
    fn help_overlay_blocks_typing() {
        let mut app = App::new(Config::default());
        app.handle_action(KeyAction::Help);
        assert!(app.show_help);
        type_text(&mut app, "x");
        assert!(app.auth.login.email.is_empty());
        app.handle_action(KeyAction::Back);
        assert!(!app.show_help);
    }

    #[test]
    fn banner_clears_after_timeout() {
        let config = Config {
            banner_timeout_ms: 10,
            ..Config::default()
        };
        let mut app = App::new(config);
        register(&mut app, "Alice", "alice@example.com", "Secret1!", "Secret1!");
        assert!(app.auth.success_message().is_some());

        let start = std::time::Instant::now();
        while start.elapsed() < Duration::from_secs(2) {
            if app.banner.poll_expired() {
                app.auth.clear_success_message();
                break;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(app.auth.success_message().is_none());
    }
}
