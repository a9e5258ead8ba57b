//! Pattern analysis section - detects repetitive, sequential and keyboard patterns.
//!
//! Each pattern family costs a fixed penalty once, however many times it
//! occurs.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const PENALTY: f64 = -5.0;

const DIGIT_RUNS: [&str; 9] = ["012", "123", "234", "345", "456", "567", "678", "789", "890"];

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

const KEYBOARD_PATTERNS: [&str; 3] = ["qwerty", "asdfgh", "zxcvbn"];

/// Analyzes password for repetitive, sequential and keyboard patterns.
///
/// # Returns
/// Penalty points (0 to -20) and one reason per detected family.
pub fn pattern_analysis_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let chars: Vec<char> = pwd.chars().collect();
    let mut result = SectionResult::new(0.0);
    if chars.len() < 3 {
        return result;
    }

    let lowered = pwd.to_lowercase();
    let families = [
        (has_repeated_run(&chars), "Password contains repetitive patterns"),
        (has_digit_run(pwd), "Password contains sequential numbers"),
        (has_letter_run(&lowered), "Password contains sequential letters"),
        (has_keyboard_pattern(&lowered), "Password contains keyboard patterns"),
    ];

    for (detected, reason) in families {
        if detected {
            result.points += PENALTY;
            result.reasons.push(reason.to_string());
        }
    }
    result
}

// Three or more identical characters in a row (e.g., "aaa").
fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_digit_run(pwd: &str) -> bool {
    DIGIT_RUNS.iter().any(|run| pwd.contains(run))
}

// Ascending ("abc") or descending ("cba") runs, input already lowercased.
fn has_letter_run(lowered: &str) -> bool {
    let ascending: Vec<char> = ALPHABET.chars().collect();
    ascending.windows(3).any(|w| {
        let forward: String = w.iter().collect();
        let backward: String = w.iter().rev().collect();
        lowered.contains(&forward) || lowered.contains(&backward)
    })
}

fn has_keyboard_pattern(lowered: &str) -> bool {
    KEYBOARD_PATTERNS.iter().any(|p| lowered.contains(p))
}
