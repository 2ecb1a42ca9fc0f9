//! Generation settings.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Which generator produces the secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Charset,
    Passphrase,
}

/// A single generation request.
///
/// Missing fields fall back to their defaults when deserialized, so a
/// partial JSON object is a valid request. Out-of-range values are caught
/// by [`GenerationConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerationConfig {
    pub mode: Mode,
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_ambiguous: bool,
    pub no_repeat: bool,
    pub no_sequence: bool,
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
}

impl GenerationConfig {
    /// Parse a request from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values the generators cannot honor.
    ///
    /// Only the field used by the selected mode is checked.
    pub fn validate(&self) -> Result<()> {
        match self.mode {
            Mode::Charset if self.length == 0 => Err(Error::InvalidLength(self.length)),
            Mode::Passphrase if self.word_count == 0 => {
                Err(Error::InvalidWordCount(self.word_count))
            }
            _ => Ok(()),
        }
    }

    pub fn is_passphrase(&self) -> bool {
        self.mode == Mode::Passphrase
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Charset,
            length: 16,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
            exclude_ambiguous: false,
            no_repeat: false,
            no_sequence: false,
            word_count: 4,
            separator: String::from("-"),
            capitalize: false,
        }
    }
}
