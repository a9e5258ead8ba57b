//! Password generation and strength evaluation library
//!
//! Generates random passwords under character-class constraints, with
//! guaranteed class coverage and optional exclusion of confusable
//! characters, and scores password strength heuristically.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based entry points with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`GenerationConfig::from_env`]:
//!
//! - `PWD_LENGTH`: password length (default: 16)
//! - `PWD_CLASSES`: comma-separated `upper,lower,digits,symbols` (default: all)
//! - `PWD_EXCLUDE_SIMILAR` / `PWD_EXCLUDE_AMBIGUOUS`: boolean flags (default: false)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_generator::{generate, evaluate_password_strength, GenerationConfig, Preset};
//! use secrecy::ExposeSecret;
//!
//! let config = GenerationConfig::from(Preset::Strong).exclude_similar(true);
//! config.validate().expect("Invalid configuration");
//!
//! let password = generate(&config).expect("Failed to generate password");
//! let report = evaluate_password_strength(&password);
//!
//! println!("Password: {}", password.expose_secret());
//! println!("Score: {} ({:?})", report.score, report.level);
//! ```

// Internal modules
mod charset;
mod config;
mod error;
mod evaluator;
mod generator;
mod report;
mod sections;
mod stats;

// Public API
pub use charset::{build as build_alphabet, class_pool, AMBIGUOUS, DIGITS, LOWERCASE, SIMILAR, SYMBOLS, UPPERCASE};
pub use config::{CharClass, GenerationConfig, Preset, MAX_LENGTH, MIN_LENGTH};
pub use error::{GeneratorError, Result};
pub use evaluator::{evaluate_password_strength, evaluate_str};
pub use generator::{generate, generate_and_evaluate, generate_with_rng};
pub use report::{StrengthLevel, StrengthReport};
pub use stats::PasswordStats;

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;

#[cfg(feature = "async")]
pub use generator::generate_password_tx;
