//! Per-class character counts.

use crate::charset::SYMBOLS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordStats {
    pub length: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    /// Members of the generator's symbol set only.
    pub symbols: usize,
}

impl PasswordStats {
    pub fn from_password(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut stats, c| {
            stats.length += 1;
            if c.is_ascii_uppercase() {
                stats.uppercase += 1;
            } else if c.is_ascii_lowercase() {
                stats.lowercase += 1;
            } else if c.is_ascii_digit() {
                stats.digits += 1;
            } else if SYMBOLS.contains(c) {
                stats.symbols += 1;
            }
            stats
        })
    }
}
