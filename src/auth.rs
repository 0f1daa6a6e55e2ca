//! View machine, login and registration flows, and the current session.
//!
//! ```text
//!            show_register
//!   Login  ───────────────▶ Register
//!     ▲   ◀───────────────    │
//!     │       show_login      │
//!     │ logout                │ submit_register
//!     │                       ▼
//!     └──────────────── Dashboard ◀── submit_login (from Login)
//! ```

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::data::{Directory, User};
use crate::state::{Field, FieldError, FormErrors, LoginForm, RegisterForm};
use crate::validation::is_valid_email;

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 6;

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const REGISTER_SUCCESS: &str = "Account created successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Register,
    Dashboard,
}

/// All state behind the three views.
#[derive(Debug, Default)]
pub struct AuthState {
    view: View,
    directory: Directory,
    /// Directory key of the signed-in user.
    session: Option<String>,
    success_message: Option<&'static str>,
    pub login: LoginForm,
    pub register: RegisterForm,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session
            .as_deref()
            .and_then(|email| self.directory.get(email))
    }

    pub fn success_message(&self) -> Option<&'static str> {
        self.success_message
    }

    pub fn clear_success_message(&mut self) {
        self.success_message = None;
    }

    /// Login → Register. Returns `false` from any other view.
    pub fn show_register(&mut self) -> bool {
        if self.view != View::Login {
            return false;
        }
        self.view = View::Register;
        true
    }

    /// Register → Login. Returns `false` from any other view.
    pub fn show_login(&mut self) -> bool {
        if self.view != View::Register {
            return false;
        }
        self.view = View::Login;
        true
    }

    /// Checks the login form and signs the user in.
    ///
    /// Rules short-circuit in order: email format, email known, password
    /// matches. Returns `true` when the view moved to the dashboard.
    pub fn submit_login(&mut self) -> bool {
        if self.view != View::Login {
            return false;
        }

        let errors = self.login_errors();
        self.login.errors = errors;
        if !self.login.errors.is_empty() {
            debug!(fields = ?self.login.errors.fields().collect::<Vec<_>>(), "login rejected");
            return false;
        }

        info!(email = %self.login.email, "login succeeded");
        self.session = Some(std::mem::take(&mut self.login.email));
        self.login.clear_inputs();
        self.success_message = Some(LOGIN_SUCCESS);
        self.view = View::Dashboard;
        true
    }

    fn login_errors(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        let email = self.login.email.as_str();
        if !is_valid_email(email) {
            errors.set(Field::Email, FieldError::InvalidEmail);
        } else {
            match self.directory.get(email) {
                None => errors.set(Field::Email, FieldError::EmailNotFound),
                Some(user) if user.password != self.login.password => {
                    errors.set(Field::Password, FieldError::IncorrectPassword)
                }
                Some(_) => {}
            }
        }
        errors
    }

    /// Checks the registration form, creates the account dated `today`, and
    /// signs it in.
    ///
    /// Every rule is checked; all failures are reported together. Returns
    /// `true` when the view moved to the dashboard.
    pub fn submit_register(&mut self, today: NaiveDate) -> bool {
        if self.view != View::Register {
            return false;
        }

        let errors = self.register_errors();
        self.register.errors = errors;
        if !self.register.errors.is_empty() {
            debug!(fields = ?self.register.errors.fields().collect::<Vec<_>>(), "registration rejected");
            return false;
        }

        let user = User {
            name: self.register.name.clone(),
            email: self.register.email.clone(),
            password: self.register.password.clone(),
            join_date: today,
        };
        let email = user.email.clone();
        if !self.directory.insert(user) {
            self.register.errors.set(Field::Email, FieldError::EmailTaken);
            return false;
        }

        info!(email = %email, users = self.directory.len(), "account created");
        self.session = Some(email);
        self.register.clear_inputs();
        self.success_message = Some(REGISTER_SUCCESS);
        self.view = View::Dashboard;
        true
    }

    fn register_errors(&self) -> FormErrors {
        let form = &self.register;
        let mut errors = FormErrors::new();

        if form.name.trim().chars().count() < MIN_NAME_LEN {
            errors.set(Field::Name, FieldError::NameTooShort);
        }

        if !is_valid_email(&form.email) {
            errors.set(Field::Email, FieldError::InvalidEmail);
        } else if self.directory.contains(&form.email) {
            errors.set(Field::Email, FieldError::EmailTaken);
        }

        if form.password.chars().count() < MIN_PASSWORD_LEN {
            errors.set(Field::Password, FieldError::PasswordTooShort);
        }

        if form.password != form.confirm_password {
            errors.set(Field::ConfirmPassword, FieldError::PasswordMismatch);
        }

        errors
    }

    /// Dashboard → Login, ending the session. Returns `false` from any other
    /// view.
    pub fn logout(&mut self) -> bool {
        if self.view != View::Dashboard {
            return false;
        }
        if let Some(email) = self.session.take() {
            info!(email = %email, "logged out");
        }
        self.view = View::Login;
        true
    }
}
