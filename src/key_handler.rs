use std::time::Duration;

use authdemo::View;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    Quit,
    Back,
    Help,
    NextField,
    PrevField,
    Submit,
    SwitchForm,
    InputChar(char),
    Backspace,
    None,
}

#[derive(Debug)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `tick` for an event. Returns `KeyAction::None` on timeout so
    /// the loop can redraw and service timers.
    pub fn handle_crossterm_events(&mut self, tick: Duration) -> color_eyre::Result<KeyAction> {
        if !event::poll(tick)? {
            return Ok(KeyAction::None);
        }
        match event::read()? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => KeyAction::Quit,
            (KeyModifiers::CONTROL, KeyCode::Char('r') | KeyCode::Char('R')) => {
                KeyAction::SwitchForm
            }
            (_, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::F(1)) => KeyAction::Help,
            (_, KeyCode::BackTab) => KeyAction::PrevField,
            (KeyModifiers::NONE, KeyCode::Tab | KeyCode::Down) => KeyAction::NextField,
            (KeyModifiers::NONE, KeyCode::Up) => KeyAction::PrevField,
            (KeyModifiers::NONE, KeyCode::Enter) => KeyAction::Submit,
            (KeyModifiers::NONE, KeyCode::Backspace) => KeyAction::Backspace,
            // AltGr arrives as Control+Alt on some platforms
            (m, KeyCode::Char(c))
                if !m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::ALT) =>
            {
                KeyAction::InputChar(c)
            }
            _ => KeyAction::None,
        }
    }
}

/// What the app should do in response to an action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Quit,
    ToggleHelp,
    CloseHelp,
    FocusNext,
    FocusPrev,
    InsertChar(char),
    DeleteChar,
    SubmitLogin,
    SubmitRegister,
    ShowRegister,
    ShowLogin,
    Logout,
    None,
}

/// Context passed to the processor to decide what an action means
#[derive(Debug, Clone, Copy)]
pub struct ActionContext {
    pub view: View,
    pub show_help: bool,
}

/// Stateless action processor: takes action + context, returns the command
pub struct ActionProcessor;

impl ActionProcessor {
    pub fn process(action: KeyAction, ctx: &ActionContext) -> Command {
        match action {
            KeyAction::Quit => return Command::Quit,
            KeyAction::Help => return Command::ToggleHelp,
            KeyAction::Back if ctx.show_help => return Command::CloseHelp,
            _ if ctx.show_help => return Command::None,
            _ => {}
        }

        match ctx.view {
            View::Login | View::Register => Self::process_form(action, ctx.view),
            View::Dashboard => Self::process_dashboard(action),
        }
    }

    fn process_form(action: KeyAction, view: View) -> Command {
        let on_login = view == View::Login;
        match action {
            KeyAction::NextField => Command::FocusNext,
            KeyAction::PrevField => Command::FocusPrev,
            KeyAction::InputChar(c) => Command::InsertChar(c),
            KeyAction::Backspace => Command::DeleteChar,
            KeyAction::Submit if on_login => Command::SubmitLogin,
            KeyAction::Submit => Command::SubmitRegister,
            KeyAction::SwitchForm if on_login => Command::ShowRegister,
            KeyAction::SwitchForm => Command::ShowLogin,
            _ => Command::None,
        }
    }

    fn process_dashboard(action: KeyAction) -> Command {
        match action {
            KeyAction::InputChar('l') => Command::Logout,
            KeyAction::InputChar('q') => Command::Quit,
            _ => Command::None,
        }
    }
}
