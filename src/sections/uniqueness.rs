//! Uniqueness section - ratio of distinct characters to length.

use std::collections::HashSet;

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MAX_POINTS: f64 = 25.0;

/// Below this ratio the password is flagged as repetitive.
const LOW_RATIO: f64 = 0.5;

/// Scores `distinct / length * 25`, capped at 25.
pub fn uniqueness_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let len = pwd.chars().count();
    if len == 0 {
        return SectionResult::new(0.0);
    }

    let unique_chars: HashSet<char> = pwd.chars().collect();
    let ratio = unique_chars.len() as f64 / len as f64;

    let result = SectionResult::new((ratio * MAX_POINTS).min(MAX_POINTS));
    if ratio < LOW_RATIO {
        return result.with_reason("Password reuses too many characters");
    }
    result
}
