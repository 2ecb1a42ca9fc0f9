//! Strength labels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Mode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label a secret from its entropy and detected patterns.
///
/// Charset secrets need more than 80 bits and no pattern to be strong.
/// Passphrases are judged on entropy alone.
pub fn classify<S: AsRef<str>>(mode: Mode, entropy_bits: f64, patterns: &[S]) -> Strength {
    match mode {
        Mode::Charset => {
            if entropy_bits > 80.0 && patterns.is_empty() {
                Strength::Strong
            } else if entropy_bits > 50.0 {
                Strength::Medium
            } else {
                Strength::Weak
            }
        }
        Mode::Passphrase => {
            if entropy_bits > 60.0 {
                Strength::Strong
            } else if entropy_bits > 40.0 {
                Strength::Medium
            } else {
                Strength::Weak
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn charset_thresholds_are_strict() {
        assert_eq!(classify(Mode::Charset, 80.0, NONE), Strength::Medium);
        assert_eq!(classify(Mode::Charset, 80.01, NONE), Strength::Strong);
        assert_eq!(classify(Mode::Charset, 50.0, NONE), Strength::Weak);
        assert_eq!(classify(Mode::Charset, 50.01, NONE), Strength::Medium);
    }

    #[test]
    fn charset_pattern_caps_at_medium() {
        assert_eq!(classify(Mode::Charset, 120.0, &["Sequential pattern"]), Strength::Medium);
        assert_eq!(classify(Mode::Charset, 30.0, &["Sequential pattern"]), Strength::Weak);
    }

    #[test]
    fn passphrase_ignores_patterns() {
        assert_eq!(
            classify(Mode::Passphrase, 61.0, &["Low character variety"]),
            Strength::Strong
        );
        assert_eq!(classify(Mode::Passphrase, 60.0, NONE), Strength::Medium);
        assert_eq!(classify(Mode::Passphrase, 40.0, NONE), Strength::Weak);
        assert_eq!(classify(Mode::Passphrase, 18.8, NONE), Strength::Weak);
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::Weak.to_string(), "Weak");
        assert_eq!(serde_json::to_string(&Strength::Strong).unwrap(), "\"Strong\"");
    }
}
