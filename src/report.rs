//! Strength report types.

use std::fmt;

/// Categorical strength band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// Maps a 0-100 score to its band; lower bounds are inclusive.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..30 => StrengthLevel::Weak,
            30..60 => StrengthLevel::Medium,
            60..80 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring a password.
///
/// `level` is `None` only for the empty password.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StrengthReport {
    pub score: u8,
    pub level: Option<StrengthLevel>,
    pub reasons: Vec<String>,
}

impl StrengthReport {
    /// Level, treating the empty password as `Weak`.
    pub fn strength(&self) -> StrengthLevel {
        self.level.unwrap_or(StrengthLevel::Weak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_boundaries() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(29), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(30), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(59), StrengthLevel::Medium);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(79), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::VeryStrong);
        assert_eq!(StrengthLevel::from_score(100), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(StrengthLevel::VeryStrong.to_string(), "very-strong");
        assert_eq!(StrengthLevel::Weak.as_str(), "weak");
    }

    #[test]
    fn test_empty_report_strength() {
        let report = StrengthReport::default();
        assert_eq!(report.level, None);
        assert_eq!(report.strength(), StrengthLevel::Weak);
    }
}
