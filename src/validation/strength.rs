//! Password strength indicator

use super::rules::{password_len, MIN_PASSWORD_LEN};
use ratatui::style::Color;

/// Characters that count towards the "special" category
pub const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Qualitative strength of a password
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum PasswordStrength {
    /// Nothing typed yet; no indicator is shown
    #[default]
    Empty,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Display color for the indicator
    pub fn color(&self) -> Color {
        match self {
            Self::Empty | Self::Weak => Color::Red,
            Self::Medium => Color::Yellow,
            Self::Strong => Color::Green,
            Self::VeryStrong => Color::LightGreen,
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

/// Score a password by length and character variety
pub fn score(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Empty;
    }
    if password_len(password) < MIN_PASSWORD_LEN {
        return PasswordStrength::Weak;
    }

    let categories = [
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    ];

    match categories.iter().filter(|hit| **hit).count() {
        4 => PasswordStrength::VeryStrong,
        3 => PasswordStrength::Strong,
        2 => PasswordStrength::Medium,
        _ => PasswordStrength::Weak,
    }
}
