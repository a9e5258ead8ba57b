//! Character set building for password generation.

use crate::config::{CharClass, GenerationConfig};

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Visually confusable characters removed by `exclude_similar`.
pub const SIMILAR: &str = "0O1lI";
/// Punctuation removed by `exclude_ambiguous`.
pub const AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

/// Raw character range of a class.
pub fn class_chars(class: CharClass) -> &'static str {
    match class {
        CharClass::Uppercase => UPPERCASE,
        CharClass::Lowercase => LOWERCASE,
        CharClass::Digits => DIGITS,
        CharClass::Symbols => SYMBOLS,
    }
}

/// Characters of a single class with the config's exclusions applied.
///
/// May be empty for pathological exclusion sets.
pub fn class_pool(class: CharClass, config: &GenerationConfig) -> Vec<char> {
    class_chars(class)
        .chars()
        .filter(|&c| is_allowed(c, config))
        .collect()
}

/// Builds the alphabet: enabled classes in canonical order, exclusions
/// applied, duplicates collapsed (first occurrence kept).
pub fn build(config: &GenerationConfig) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    for class in config.enabled_classes() {
        for c in class_pool(class, config) {
            if !chars.contains(&c) {
                chars.push(c);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!("Alphabet built: {} characters", chars.len());

    chars
}

// Exact character comparison, no pattern syntax involved.
fn is_allowed(c: char, config: &GenerationConfig) -> bool {
    !(config.exclude_similar && SIMILAR.contains(c))
        && !(config.exclude_ambiguous && AMBIGUOUS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// Every subset of the four classes, including the empty one.
    fn all_class_sets() -> Vec<BTreeSet<CharClass>> {
        (0u8..16)
            .map(|mask| {
                CharClass::ALL
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, c)| *c)
                    .collect()
            })
            .collect()
    }

    fn concatenated(classes: &BTreeSet<CharClass>) -> String {
        classes.iter().map(|c| class_chars(*c)).collect()
    }

    #[test]
    fn test_build_no_classes_is_empty() {
        let config = GenerationConfig::new(12, Vec::<CharClass>::new());
        assert!(build(&config).is_empty());
    }

    #[test]
    fn test_build_canonical_order() {
        let config = GenerationConfig::new(12, [CharClass::Digits, CharClass::Uppercase]);
        let alphabet: String = build(&config).into_iter().collect();
        assert_eq!(alphabet, format!("{}{}", UPPERCASE, DIGITS));
    }

    #[test]
    fn test_build_all_classes_sizes() {
        let alphabet = build(&GenerationConfig::default());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + SYMBOLS.len());
        let distinct: BTreeSet<char> = alphabet.iter().copied().collect();
        assert_eq!(distinct.len(), alphabet.len());
    }

    #[test]
    fn test_exclude_similar_removes_exactly_similar_chars() {
        for classes in all_class_sets() {
            let mut config = GenerationConfig::new(12, classes.iter().copied());
            let full = build(&config);
            config.exclude_similar = true;
            let filtered = build(&config);

            let expected: Vec<char> = concatenated(&classes)
                .chars()
                .filter(|c| !"0O1lI".contains(*c))
                .collect();
            assert_eq!(filtered, expected, "classes {:?}", classes);

            let removed: BTreeSet<char> = full
                .iter()
                .filter(|c| !filtered.contains(c))
                .copied()
                .collect();
            for c in &removed {
                assert!(SIMILAR.contains(*c), "unexpected removal of {:?}", c);
            }
        }
    }

    #[test]
    fn test_exclude_ambiguous_exact_match() {
        let config = GenerationConfig::new(12, [CharClass::Symbols]).exclude_ambiguous(true);
        let alphabet: String = build(&config).into_iter().collect();
        assert_eq!(alphabet, "!@#$%^&*_+-=|?");
    }

    #[test]
    fn test_exclude_ambiguous_leaves_letters_and_digits() {
        let config = GenerationConfig::new(12, [CharClass::Uppercase, CharClass::Lowercase, CharClass::Digits])
            .exclude_ambiguous(true);
        assert_eq!(build(&config).len(), 62);
    }

    #[test]
    fn test_both_exclusions() {
        let config = GenerationConfig::default()
            .exclude_similar(true)
            .exclude_ambiguous(true);
        let alphabet = build(&config);
        assert_eq!(alphabet.len(), 62 - 5 + 14);
        assert!(!alphabet.iter().any(|c| SIMILAR.contains(*c) || AMBIGUOUS.contains(*c)));
    }

    #[test]
    fn test_class_pool_applies_exclusions() {
        let config = GenerationConfig::new(8, [CharClass::Digits]).exclude_similar(true);
        let pool: String = class_pool(CharClass::Digits, &config).into_iter().collect();
        assert_eq!(pool, "23456789");
    }
}
