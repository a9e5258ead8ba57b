//! Error types for configuration and generation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The configuration cannot produce a password (no class, bad length, bad env value).
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Exclusion filters removed every candidate character.
    #[error("No characters available after applying exclusions")]
    EmptyAlphabet,
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, GeneratorError>;
