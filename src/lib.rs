//! Password and passphrase generation with strength reporting.
//!
//! A [`GenerationConfig`] selects one of two generators. The produced secret
//! is scored for entropy, a brute-force crack time and weak patterns, then
//! labelled [`Strength::Weak`], [`Strength::Medium`] or [`Strength::Strong`].
//!
//! ```
//! use passgauge::{GenerationConfig, generate};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = generate(&GenerationConfig::default(), &mut rng).unwrap();
//! assert_eq!(result.secret().chars().count(), 16);
//! ```

pub mod config;
mod error;
pub mod pass;
pub mod rng;
pub mod strength;

use rand::Rng;
use serde::Serialize;
use tracing::debug;
use zeroize::Zeroize;

pub use config::{GenerationConfig, Mode};
pub use error::Error;
pub use rng::Entropy;
pub use strength::Strength;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;

/// A generated secret and its evaluation.
///
/// The secret is wiped from memory when the result is dropped.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    secret: String,
    entropy_bits: f64,
    #[serde(rename = "crackTimeLabel")]
    crack_time: String,
    #[serde(rename = "detectedPatterns")]
    patterns: Vec<String>,
    #[serde(rename = "strengthLabel")]
    strength: Strength,
}

impl GenerationResult {
    /// Score an already generated secret.
    pub fn evaluate(secret: String, mode: Mode, entropy_bits: f64) -> Self {
        let crack_time = strength::crack_time(entropy_bits);
        let patterns = strength::detect_patterns(&secret);
        let strength = strength::classify(mode, entropy_bits, &patterns);
        Self {
            secret,
            entropy_bits,
            crack_time,
            patterns,
            strength,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }

    pub fn crack_time(&self) -> &str {
        &self.crack_time
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn strength(&self) -> Strength {
        self.strength
    }

    /// JSON object with `secret`, `entropyBits`, `crackTimeLabel`,
    /// `detectedPatterns` and `strengthLabel`.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Drop for GenerationResult {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// Generate one secret for `config` and evaluate it.
pub fn generate<R: Rng + ?Sized>(config: &GenerationConfig, rng: &mut R) -> Result<GenerationResult> {
    config.validate()?;

    let (secret, entropy_bits) = match config.mode {
        Mode::Charset => {
            let opts = pass::CharsetOptions::from(config);
            let secret = pass::generate_charset(rng, &opts);
            let bits = strength::password_entropy(&secret, pass::charset::effective_size(&opts));
            (secret, bits)
        }
        Mode::Passphrase => {
            let secret = pass::generate_passphrase(
                rng,
                config.word_count,
                &config.separator,
                config.capitalize,
            );
            let bits = strength::passphrase_entropy(config.word_count, pass::WORDLIST.len());
            (secret, bits)
        }
    };

    let result = GenerationResult::evaluate(secret, config.mode, entropy_bits);
    debug!(
        mode = ?config.mode,
        entropy_bits = result.entropy_bits,
        strength = %result.strength,
        patterns = result.patterns.len(),
        "generated secret"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn default_config_is_strong_unless_a_pattern_hits() {
        let mut rng = StdRng::seed_from_u64(21);
        let result = generate(&GenerationConfig::default(), &mut rng).unwrap();
        assert!((result.entropy_bits() - 16.0 * 90f64.log2()).abs() < 1e-9);
        if result.patterns().is_empty() {
            assert_eq!(result.strength(), Strength::Strong);
        } else {
            assert_eq!(result.strength(), Strength::Medium);
        }
    }

    #[test]
    fn evaluate_scores_a_fixed_secret() {
        let result = GenerationResult::evaluate("aaaaaaaaaaaaaaaa".into(), Mode::Charset, 104.0);
        assert_eq!(
            result.patterns(),
            ["Repeated characters", "Low character variety"]
        );
        assert_eq!(result.strength(), Strength::Medium);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut rng = StdRng::seed_from_u64(22);
        let config = GenerationConfig {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(generate(&config, &mut rng), Err(Error::InvalidLength(0))));
    }
}
