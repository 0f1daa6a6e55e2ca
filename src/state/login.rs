//! Login form state.

use super::{Field, Form, FormErrors};

const LOGIN_FIELDS: &[Field] = &[Field::Email, Field::Password];

/// Inputs and errors for the Login view.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    /// Errors from the last submit. At most one entry.
    pub errors: FormErrors,
    focus: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties both inputs and moves focus back to the first one. Errors are
    /// left as they are.
    pub fn clear_inputs(&mut self) {
        self.email.clear();
        self.password.clear();
        self.focus = 0;
    }
}

impl Form for LoginForm {
    fn fields(&self) -> &'static [Field] {
        LOGIN_FIELDS
    }

    fn focus_index(&self) -> usize {
        self.focus
    }

    fn set_focus_index(&mut self, index: usize) {
        self.focus = index.min(LOGIN_FIELDS.len() - 1);
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Name | Field::ConfirmPassword => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_focuses_email() {
        let form = LoginForm::new();
        assert_eq!(form.focused_field(), Field::Email);
        assert!(form.errors.is_empty());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = LoginForm::new();
        form.focus_next();
        assert_eq!(form.focused_field(), Field::Password);
        form.focus_next();
        assert_eq!(form.focused_field(), Field::Email);
        form.focus_prev();
        assert_eq!(form.focused_field(), Field::Password);
    }

    #[test]
    fn test_typing_edits_focused_field() {
        let mut form = LoginForm::new();
        form.push_char('a');
        form.push_char('@');
        form.focus_next();
        form.push_char('x');
        assert_eq!(form.email, "a@");
        assert_eq!(form.password, "x");
        assert!(form.pop_char());
        assert!(!form.pop_char());
        assert_eq!(form.password, "");
    }

    #[test]
    fn test_unknown_field_is_ignored() {
        let mut form = LoginForm::new();
        form.set_value(Field::Name, "Alice");
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
    }

    #[test]
    fn test_clear_inputs() {
        let mut form = LoginForm::new();
        form.set_value(Field::Email, "a@b.com");
        form.set_value(Field::Password, "pw");
        form.focus_next();
        form.clear_inputs();
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert_eq!(form.focused_field(), Field::Email);
    }
}
