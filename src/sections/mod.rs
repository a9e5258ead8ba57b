//! Password scoring sections
//!
//! Each section scores a specific aspect of password strength.

mod length;
mod pattern;
mod uniqueness;
mod variety;

pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use uniqueness::uniqueness_section;
pub use variety::character_variety_section;

/// Outcome of a single section.
/// - `points` - contribution to the score (negative for penalties)
/// - `reasons` - weaknesses detected by the section, if any
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub points: f64,
    pub reasons: Vec<String>,
}

impl SectionResult {
    pub fn new(points: f64) -> Self {
        Self {
            points,
            reasons: Vec::new(),
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reasons.push(reason.into());
        self
    }
}
