//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::SYMBOLS;

const POINTS_PER_CLASS: f64 = 10.0;

/// Scores class diversity, 10 points per class present (max 40).
///
/// Only ASCII letters and digits count, and only members of the
/// generator's symbol set count as special characters.
///
/// # Returns
/// A result with a reason listing the missing classes, if any.
pub fn character_variety_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_special = pwd.chars().any(|c| SYMBOLS.contains(c));

    let present = [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count();

    let missing: Vec<_> = vec![
        if !has_upper { Some("uppercase") } else { None },
        if !has_lower { Some("lowercase") } else { None },
        if !has_digit { Some("numbers") } else { None },
        if !has_special { Some("special characters") } else { None },
    ]
    .into_iter()
    .flatten()
    .collect();

    let result = SectionResult::new(present as f64 * POINTS_PER_CLASS);
    if !missing.is_empty() {
        return result.with_reason(format!("Missing: {}", missing.join(", ")));
    }
    result
}
