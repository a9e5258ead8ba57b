//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::report::{StrengthLevel, StrengthReport};
use crate::sections::{
    character_variety_section, length_section, pattern_analysis_section, uniqueness_section,
    SectionResult,
};

/// Evaluates password strength and returns a detailed report.
///
/// The score is the clamped, rounded sum of the length, variety,
/// uniqueness and pattern sections. Total over all inputs; the empty
/// password scores 0 with no level.
pub fn evaluate_password_strength(password: &SecretString) -> StrengthReport {
    if password.expose_secret().is_empty() {
        return StrengthReport::default();
    }

    let mut reasons = Vec::new();
    let mut score = 0.0;

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&SecretString) -> SectionResult); 4] = [
        ("length", length_section),
        ("variety", character_variety_section),
        ("uniqueness", uniqueness_section),
        ("pattern", pattern_analysis_section),
    ];

    for (_section_name, section_fn) in sections {
        let result = section_fn(password);

        #[cfg(feature = "tracing")]
        tracing::trace!("section {}: {} points", _section_name, result.points);

        score += result.points;
        reasons.extend(result.reasons);
    }

    let score = f64::clamp(score, 0.0, 100.0).round() as u8;

    StrengthReport {
        score,
        level: Some(StrengthLevel::from_score(score)),
        reasons,
    }
}

/// Convenience wrapper for plain strings.
pub fn evaluate_str(password: &str) -> StrengthReport {
    evaluate_password_strength(&SecretString::new(password.into()))
}

/// Async version that sends the report via channel.
///
/// Nothing is sent if `token` is cancelled before evaluation completes.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before start");
        return;
    }

    let report = evaluate_password_strength(password);

    if token.is_cancelled() {
        return;
    }

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(pwd: &str) -> StrengthReport {
        evaluate_password_strength(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_evaluate_empty_password() {
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(report.level, None);
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_repeated_char_is_weak() {
        // 10 (length) + 10 (lowercase) + 3.125 (uniqueness) - 5 (repeat)
        let report = evaluate("aaaaaaaa");
        assert_eq!(report.score, 18);
        assert_eq!(report.level, Some(StrengthLevel::Weak));
        assert!(report.reasons.iter().any(|r| r.contains("repetitive")));
    }

    #[test]
    fn test_evaluate_top_band() {
        // 20 distinct chars, all classes, no patterns: 25 + 40 + 25
        let report = evaluate("Kp7#Wm2!Xq9$Rt4@Zv6%");
        assert_eq!(report.score, 90);
        assert_eq!(report.level, Some(StrengthLevel::VeryStrong));
        assert!(report.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_medium_password() {
        // 10 + 30 + 7/8 * 25, no symbol from the set
        let report = evaluate("MyPass19");
        assert_eq!(report.score, 62);
        assert_eq!(report.level, Some(StrengthLevel::Strong));

        // 0 + 30 + 25 - 5 ("abc")
        let report = evaluate("abcD9");
        assert_eq!(report.score, 50);
        assert_eq!(report.level, Some(StrengthLevel::Medium));
    }

    #[test]
    fn test_evaluate_symbols_outside_set() {
        // 0 length + 0 variety + 25/3 uniqueness - 5 repeat = 3.33
        let report = evaluate("~~~");
        assert_eq!(report.score, 3);
        assert_eq!(report.level, Some(StrengthLevel::Weak));
    }

    #[test]
    fn test_evaluate_rounds_half_up() {
        // 10 + 10 + (7/10)*25 = 37.5 -> 38
        let report = evaluate("qpzmxnvqpz");
        assert_eq!(report.score, 38);
    }

    #[test]
    fn test_evaluate_is_pure() {
        for pwd in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
            assert!(evaluate(pwd).score <= 100);
        }
    }

    #[test]
    fn test_evaluate_str_matches_secret() {
        assert_eq!(evaluate_str("MyPass123!"), evaluate("MyPass123!"));
    }
}
