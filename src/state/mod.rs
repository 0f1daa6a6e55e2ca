//! Form state modules for the authdemo TUI application.
//!
//! Each form owns its input buffers, the focused field, and the error set from
//! the last submit attempt. Validation rules live in [`crate::auth`]; these
//! types only hold and edit values.
//!
//! # Architecture
//!
//! ```text
//! AuthState
//! ├── LoginForm     - Email, Password
//! └── RegisterForm  - Name, Email, Password, ConfirmPassword + strength score
//! ```

use std::collections::BTreeMap;

use thiserror::Error;

mod login;
mod register;

pub use login::LoginForm;
pub use register::RegisterForm;

/// An input on one of the forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    /// Whether the input should render masked.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

/// A validation failure shown beneath an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Email not found")]
    EmailNotFound,
    #[error("Incorrect password")]
    IncorrectPassword,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email already registered")]
    EmailTaken,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Per-field errors from the most recent submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Fields with an error, in form order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Shared editing behaviour for forms made of text inputs.
pub trait Form {
    /// Inputs in display order.
    fn fields(&self) -> &'static [Field];

    fn focus_index(&self) -> usize;

    fn set_focus_index(&mut self, index: usize);

    /// Mutable buffer for `field`, or `None` if the form has no such input.
    fn value_mut(&mut self, field: Field) -> Option<&mut String>;

    /// Called after any edit of `field`.
    fn on_edit(&mut self, _field: Field) {}

    fn focused_field(&self) -> Field {
        let fields = self.fields();
        fields[self.focus_index().min(fields.len() - 1)]
    }

    fn focus_next(&mut self) {
        let next = (self.focus_index() + 1) % self.fields().len();
        self.set_focus_index(next);
    }

    fn focus_prev(&mut self) {
        let len = self.fields().len();
        let prev = (self.focus_index() + len - 1) % len;
        self.set_focus_index(prev);
    }

    fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        if let Some(value) = self.value_mut(field) {
            value.push(c);
            self.on_edit(field);
        }
    }

    /// Removes the last character of the focused input.
    ///
    /// Returns `true` if a character was removed.
    fn pop_char(&mut self) -> bool {
        let field = self.focused_field();
        let removed = self
            .value_mut(field)
            .map(|value| value.pop().is_some())
            .unwrap_or(false);
        if removed {
            self.on_edit(field);
        }
        removed
    }

    /// Replaces the value of `field` wholesale.
    fn set_value(&mut self, field: Field, text: &str) {
        if let Some(value) = self.value_mut(field) {
            value.clear();
            value.push_str(text);
            self.on_edit(field);
        }
    }
}
