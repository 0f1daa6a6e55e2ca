//! Registration form state.
//!
//! Holds the four registration inputs and keeps a live password strength
//! score in step with the password buffer.

use super::{Field, Form, FormErrors};
use crate::validation::{check_password_strength, Strength};

const REGISTER_FIELDS: &[Field] = &[
    Field::Name,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
];

/// Inputs, strength score, and errors for the Register view.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Errors from the last submit. Every failing rule has an entry.
    pub errors: FormErrors,
    strength: u8,
    focus: usize,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score of the current password, 0 while it is empty.
    pub fn strength_score(&self) -> u8 {
        self.strength
    }

    /// Indicator to show under the password, `None` while it is empty.
    pub fn strength_indicator(&self) -> Option<Strength> {
        if self.password.is_empty() {
            None
        } else {
            Some(Strength::from_score(self.strength))
        }
    }

    /// Empties all inputs, resets the strength score, and focuses the name.
    pub fn clear_inputs(&mut self) {
        self.focus = 0;
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.strength = 0;
    }

    fn recompute_strength(&mut self) {
        self.strength = if self.password.is_empty() {
            0
        } else {
            check_password_strength(&self.password)
        };
    }
}

impl Form for RegisterForm {
    fn fields(&self) -> &'static [Field] {
        REGISTER_FIELDS
    }

    fn focus_index(&self) -> usize {
        self.focus
    }

    fn set_focus_index(&mut self, index: usize) {
        self.focus = index.min(REGISTER_FIELDS.len() - 1);
    }

    fn value_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
        }
    }

    fn on_edit(&mut self, field: Field) {
        if field == Field::Password {
            self.recompute_strength();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_tracks_password() {
        let mut form = RegisterForm::new();
        form.set_value(Field::Password, "aaaaaaaa");
        assert_eq!(form.strength_score(), 1);
        assert_eq!(form.strength_indicator(), Some(Strength::Weak));

        form.set_value(Field::Password, "Aa1!aaaa");
        assert_eq!(form.strength_score(), 4);
        assert_eq!(form.strength_indicator(), Some(Strength::Strong));
    }

    #[test]
    fn test_strength_resets_when_password_emptied() {
        let mut form = RegisterForm::new();
        form.set_focus_index(2);
        form.push_char('A');
        form.push_char('1');
        assert_eq!(form.strength_score(), 1);
        form.pop_char();
        form.pop_char();
        assert_eq!(form.strength_score(), 0);
        assert_eq!(form.strength_indicator(), None);
    }

    #[test]
    fn test_confirm_edit_leaves_strength() {
        let mut form = RegisterForm::new();
        form.set_value(Field::Password, "Aa1!");
        let before = form.strength_score();
        form.set_value(Field::ConfirmPassword, "aaaaaaaaaaaa");
        assert_eq!(form.strength_score(), before);
    }

    #[test]
    fn test_focus_cycles_all_fields() {
        let mut form = RegisterForm::new();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(form.focused_field());
            form.focus_next();
        }
        assert_eq!(seen, REGISTER_FIELDS.to_vec());
        assert_eq!(form.focused_field(), Field::Name);
        form.focus_prev();
        assert_eq!(form.focused_field(), Field::ConfirmPassword);
    }

    #[test]
    fn test_clear_inputs_resets_everything() {
        let mut form = RegisterForm::new();
        form.set_value(Field::Name, "Alice");
        form.set_value(Field::Email, "alice@example.com");
        form.set_value(Field::Password, "Aa1!aaaa");
        form.set_value(Field::ConfirmPassword, "Aa1!aaaa");
        form.set_focus_index(3);
        form.clear_inputs();
        assert_eq!(form.focused_field(), Field::Name);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.password.is_empty());
        assert!(form.confirm_password.is_empty());
        assert_eq!(form.strength_score(), 0);
    }
}
