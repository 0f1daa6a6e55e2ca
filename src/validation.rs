//! Input validators and the password strength scale.

use std::sync::LazyLock;

use ratatui::style::Color;
use regex::Regex;

static EMAIL_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Minimum character count that earns the length point.
const STRONG_LENGTH: usize = 8;

/// Checks that `email` has one `@` and a dotted domain, with no whitespace.
///
/// This is a shape check only, not RFC 5322 compliance.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.as_ref().is_some_and(|re| re.is_match(email))
}

/// Scores a password from 0 to 4.
///
/// One point each for:
/// - at least 8 characters
/// - both an ASCII lowercase and an ASCII uppercase letter
/// - an ASCII digit
/// - any character that is not an ASCII letter or digit
pub fn check_password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= STRONG_LENGTH {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
    {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

/// Presentation bucket for a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => Strength::Weak,
            2..=3 => Strength::Medium,
            _ => Strength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak password",
            Strength::Medium => "Medium password",
            Strength::Strong => "Strong password",
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Strength::Weak => "#f44336",
            Strength::Medium => "#ff9800",
            Strength::Strong => "#4caf50",
        }
    }

    /// Same value as [`Strength::hex`], for terminal rendering.
    pub fn color(self) -> Color {
        match self {
            Strength::Weak => Color::Rgb(0xf4, 0x43, 0x36),
            Strength::Medium => Color::Rgb(0xff, 0x98, 0x00),
            Strength::Strong => Color::Rgb(0x4c, 0xaf, 0x50),
        }
    }

    /// Fill of the strength bar, in percent.
    pub fn width_percent(self) -> u16 {
        match self {
            Strength::Weak => 33,
            Strength::Medium => 66,
            Strength::Strong => 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_RE.is_some());
    }

    #[test]
    fn test_invalid_email() {
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_strength_length_only() {
        assert_eq!(check_password_strength("aaaaaaaa"), 1);
    }

    #[test]
    fn test_strength_all_rules() {
        assert_eq!(check_password_strength("Aa1!aaaa"), 4);
    }

    #[test]
    fn test_strength_empty() {
        assert_eq!(check_password_strength(""), 0);
    }

    #[test]
    fn test_strength_needs_both_cases() {
        assert_eq!(check_password_strength("abc"), 0);
        assert_eq!(check_password_strength("ABC"), 0);
        assert_eq!(check_password_strength("aBc"), 1);
    }

    #[test]
    fn test_strength_symbol_includes_space_and_unicode() {
        assert_eq!(check_password_strength("a b"), 1);
        assert_eq!(check_password_strength("é"), 1);
    }

    #[test]
    fn test_strength_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert_eq!(check_password_strength("ééééééé"), 1);
    }

    #[test]
    fn test_strength_buckets() {
        assert_eq!(Strength::from_score(0), Strength::Weak);
        assert_eq!(Strength::from_score(1), Strength::Weak);
        assert_eq!(Strength::from_score(2), Strength::Medium);
        assert_eq!(Strength::from_score(3), Strength::Medium);
        assert_eq!(Strength::from_score(4), Strength::Strong);
    }

    #[test]
    fn test_strength_presentation() {
        assert_eq!(Strength::Weak.width_percent(), 33);
        assert_eq!(Strength::Medium.width_percent(), 66);
        assert_eq!(Strength::Strong.width_percent(), 100);
        assert_eq!(Strength::Weak.hex(), "#f44336");
        assert_eq!(Strength::Medium.label(), "Medium password");
        assert_eq!(Strength::Strong.color(), Color::Rgb(0x4c, 0xaf, 0x50));
    }
}
