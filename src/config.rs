//! Generation configuration
//!
//! Holds the immutable value the generator works from, the named presets
//! and the environment-variable overlay.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{GeneratorError, Result};

/// Shortest length accepted by [`GenerationConfig::validate`].
pub const MIN_LENGTH: usize = 4;
/// Longest length accepted by [`GenerationConfig::validate`].
pub const MAX_LENGTH: usize = 128;

const DEFAULT_LENGTH: usize = 16;

/// Character classes, declared in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Uppercase,
        CharClass::Lowercase,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharClass::Uppercase => "upper",
            CharClass::Lowercase => "lower",
            CharClass::Digits => "digits",
            CharClass::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharClass {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "upper" | "uppercase" => Ok(CharClass::Uppercase),
            "lower" | "lowercase" => Ok(CharClass::Lowercase),
            "digits" | "numbers" => Ok(CharClass::Digits),
            "symbols" => Ok(CharClass::Symbols),
            other => Err(GeneratorError::InvalidConfiguration(format!(
                "unknown character class '{}'",
                other
            ))),
        }
    }
}

/// Parameters for a single generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: BTreeSet<CharClass>,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharClass::ALL.into_iter().collect(),
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }
}

impl GenerationConfig {
    /// Creates a config with the given length and classes, no exclusions.
    pub fn new(length: usize, classes: impl IntoIterator<Item = CharClass>) -> Self {
        Self {
            length,
            classes: classes.into_iter().collect(),
            exclude_similar: false,
            exclude_ambiguous: false,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_class(mut self, class: CharClass) -> Self {
        self.classes.insert(class);
        self
    }

    pub fn without_class(mut self, class: CharClass) -> Self {
        self.classes.remove(&class);
        self
    }

    pub fn exclude_similar(mut self, exclude: bool) -> Self {
        self.exclude_similar = exclude;
        self
    }

    pub fn exclude_ambiguous(mut self, exclude: bool) -> Self {
        self.exclude_ambiguous = exclude;
        self
    }

    /// Enabled classes in canonical order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        self.classes.iter().copied()
    }

    /// Checks the constraints a caller must enforce before generating.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - No character class is enabled
    /// - `length` is outside `MIN_LENGTH..=MAX_LENGTH`
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(GeneratorError::InvalidConfiguration(
                "at least one character class must be enabled".to_string(),
            ));
        }
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&self.length) {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, self.length
            )));
        }
        Ok(())
    }

    /// Builds a config from the default, overridden by environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_LENGTH`: password length
    /// - `PWD_CLASSES`: comma-separated classes (`upper,lower,digits,symbols`)
    /// - `PWD_EXCLUDE_SIMILAR`: `1/0`, `true/false`, `yes/no`
    /// - `PWD_EXCLUDE_AMBIGUOUS`: same as above
    ///
    /// The result is not validated; call [`GenerationConfig::validate`].
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = env_var("PWD_LENGTH") {
            config.length = raw.trim().parse().map_err(|_| {
                GeneratorError::InvalidConfiguration(format!("PWD_LENGTH is not a number: '{}'", raw))
            })?;
        }

        if let Some(raw) = env_var("PWD_CLASSES") {
            config.classes = raw
                .split(',')
                .filter(|s| !s.trim().is_empty())
                .map(CharClass::from_str)
                .collect::<Result<_>>()?;
        }

        if let Some(raw) = env_var("PWD_EXCLUDE_SIMILAR") {
            config.exclude_similar = parse_flag("PWD_EXCLUDE_SIMILAR", &raw)?;
        }

        if let Some(raw) = env_var("PWD_EXCLUDE_AMBIGUOUS") {
            config.exclude_ambiguous = parse_flag("PWD_EXCLUDE_AMBIGUOUS", &raw)?;
        }

        Ok(config)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(GeneratorError::InvalidConfiguration(format!(
            "{} must be a boolean, got '{}'",
            key, raw
        ))),
    }
}

/// Ready-made configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Strong,
    Medium,
    Pin,
    Letters,
    Numbers,
}

impl Preset {
    pub fn config(&self) -> GenerationConfig {
        use CharClass::*;
        match self {
            Preset::Strong => GenerationConfig::new(16, [Uppercase, Lowercase, Digits, Symbols]),
            Preset::Medium => GenerationConfig::new(12, [Uppercase, Lowercase, Digits]),
            Preset::Pin => GenerationConfig::new(6, [Digits]),
            Preset::Letters => GenerationConfig::new(16, [Uppercase, Lowercase]),
            Preset::Numbers => GenerationConfig::new(16, [Digits]),
        }
    }
}

impl FromStr for Preset {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "strong" => Ok(Preset::Strong),
            "medium" => Ok(Preset::Medium),
            "pin" => Ok(Preset::Pin),
            "letters" => Ok(Preset::Letters),
            "numbers" => Ok(Preset::Numbers),
            other => Err(GeneratorError::InvalidConfiguration(format!(
                "unknown preset '{}'",
                other
            ))),
        }
    }
}

impl From<Preset> for GenerationConfig {
    fn from(preset: Preset) -> Self {
        preset.config()
    }
}
