use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;

/// A registered account. Passwords are held in plain text; this is a demo
/// directory, not a credential store.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    pub join_date: NaiveDate,
}

impl User {
    /// Join date as `M/D/YYYY`.
    pub fn join_date_display(&self) -> String {
        self.join_date.format("%-m/%-d/%Y").to_string()
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("join_date", &self.join_date)
            .finish()
    }
}

/// Users keyed by email, alive for the process lifetime only.
#[derive(Debug, Default)]
pub struct Directory {
    users: HashMap<String, User>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn contains(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }

    /// Adds `user` under its email. Existing records are never replaced;
    /// returns `false` if the email is already taken.
    pub fn insert(&mut self, user: User) -> bool {
        if self.users.contains_key(&user.email) {
            return false;
        }
        self.users.insert(user.email.clone(), user);
        true
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
