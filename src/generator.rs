//! Password generation.
//!
//! Every enabled class contributes one character drawn from its own pool,
//! the rest come from the full alphabet, and the combined sequence is
//! shuffled so the coverage characters land at random positions.
//!
//! Index selection goes through `rand`'s uniform range sampler, which
//! rejects out-of-zone values instead of reducing modulo the alphabet size.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use secrecy::SecretString;
use zeroize::Zeroize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset;
use crate::config::GenerationConfig;
use crate::error::{GeneratorError, Result};
use crate::evaluator::evaluate_password_strength;
use crate::report::StrengthReport;

/// Generates a password using the operating system's CSPRNG.
///
/// # Errors
///
/// Returns `EmptyAlphabet` if no class is enabled or exclusions remove
/// every candidate character. Length is not validated here; see
/// [`GenerationConfig::validate`].
pub fn generate(config: &GenerationConfig) -> Result<SecretString> {
    generate_with_rng(config, &mut OsRng)
}

/// Generates a password with a caller-supplied cryptographic RNG.
///
/// All draws, including the shuffle, use `rng`.
pub fn generate_with_rng<R>(config: &GenerationConfig, rng: &mut R) -> Result<SecretString>
where
    R: Rng + CryptoRng,
{
    let mut chars = draw_sequence(config, rng)?;
    chars.shuffle(rng);

    let password: String = chars.iter().collect();
    chars.zeroize();

    #[cfg(feature = "tracing")]
    tracing::debug!("Generated password of {} characters", password.len());

    Ok(SecretString::new(password.into()))
}

/// Generates a password and scores it.
pub fn generate_and_evaluate(config: &GenerationConfig) -> Result<(SecretString, StrengthReport)> {
    let password = generate(config)?;
    let report = evaluate_password_strength(&password);
    Ok((password, report))
}

/// Async version that sends the password and its report via channel.
///
/// Generation errors are sent as-is. Nothing is sent if `token` is
/// cancelled first.
#[cfg(feature = "async")]
pub async fn generate_password_tx(
    config: &GenerationConfig,
    token: CancellationToken,
    tx: mpsc::Sender<Result<(SecretString, StrengthReport)>>,
) {
    if token.is_cancelled() {
        return;
    }

    let outcome = generate_and_evaluate(config);

    if token.is_cancelled() {
        return;
    }

    if tx.send(outcome).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send generated password: receiver dropped");
    }
}

/// Coverage characters followed by bulk characters, before shuffling.
///
/// When `length` is shorter than the number of coverage characters, only
/// the first `length` of them (canonical class order) are kept.
fn draw_sequence<R>(config: &GenerationConfig, rng: &mut R) -> Result<Vec<char>>
where
    R: Rng + CryptoRng,
{
    let mut alphabet = charset::build(config);
    if alphabet.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::warn!("Password generation FAILED: empty alphabet");
        return Err(GeneratorError::EmptyAlphabet);
    }

    let mut chars: Vec<char> = Vec::with_capacity(config.length.max(config.classes.len()));

    for class in config.enabled_classes() {
        let mut pool = charset::class_pool(class, config);
        if let Some(&c) = pool.choose(rng) {
            chars.push(c);
        }
        pool.zeroize();
    }

    if chars.len() > config.length {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            "Requested length {} is shorter than {} required characters, truncating",
            config.length,
            chars.len()
        );
        chars.truncate(config.length);
    }

    let remaining = config.length - chars.len();
    chars.extend((0..remaining).map(|_| alphabet[rng.gen_range(0..alphabet.len())]));

    alphabet.zeroize();
    Ok(chars)
}
