//! Length section - rewards longer passwords in steps.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const MIN_LENGTH: usize = 8;

/// (threshold, points) pairs; every threshold reached adds its points.
const LENGTH_STEPS: [(usize, f64); 4] = [(MIN_LENGTH, 10.0), (12, 5.0), (16, 5.0), (20, 5.0)];

/// Scores the password length, up to 25 points.
///
/// # Returns
/// A result with a reason if the password is shorter than 8 characters.
pub fn length_section(password: &SecretString) -> SectionResult {
    let len = password.expose_secret().chars().count();
    let points: f64 = LENGTH_STEPS
        .iter()
        .filter(|(threshold, _)| len >= *threshold)
        .map(|(_, points)| points)
        .sum();

    let result = SectionResult::new(points);
    if len < MIN_LENGTH {
        return result.with_reason(format!(
            "Password should be at least {} characters",
            MIN_LENGTH
        ));
    }
    result
}
