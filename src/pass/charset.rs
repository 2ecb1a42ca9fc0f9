//! Character set building for password generation.

use crate::config::GenerationConfig;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Punctuation category.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{};:,.<>?/|~";

/// Visually confusable glyphs dropped by `exclude_ambiguous`.
pub const AMBIGUOUS: &[char] = &['O', '0', 'I', 'l', '1', '|'];

/// Category switches for the charset generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharsetOptions {
    pub length: usize,
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub symbols: bool,
    pub exclude_ambiguous: bool,
    pub no_repeat: bool,
    pub no_sequence: bool,
}

impl From<&GenerationConfig> for CharsetOptions {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            length: config.length,
            upper: config.include_upper,
            lower: config.include_lower,
            digits: config.include_digits,
            symbols: config.include_symbols,
            exclude_ambiguous: config.exclude_ambiguous,
            no_repeat: config.no_repeat,
            no_sequence: config.no_sequence,
        }
    }
}

/// Build the character pool from the enabled categories.
pub fn build(opts: &CharsetOptions) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    if opts.upper {
        chars.extend(UPPERCASE.chars());
    }
    if opts.lower {
        chars.extend(LOWERCASE.chars());
    }
    if opts.digits {
        chars.extend(DIGITS);
    }
    if opts.symbols {
        chars.extend(SYMBOLS.chars());
    }
    if opts.exclude_ambiguous {
        chars.retain(|c| !AMBIGUOUS.contains(c));
    }

    chars
}

/// Charset size used for entropy.
///
/// Computed from fixed per-category counts, not from the built pool, and
/// never below 1. With ambiguous glyphs excluded each category loses a fixed
/// amount (upper 2, lower 2, digits 2, symbols 1).
pub fn effective_size(opts: &CharsetOptions) -> usize {
    let mut size = 0;
    if opts.upper {
        size += 26;
        if opts.exclude_ambiguous {
            size -= 2;
        }
    }
    if opts.lower {
        size += 26;
        if opts.exclude_ambiguous {
            size -= 2;
        }
    }
    if opts.digits {
        size += 10;
        if opts.exclude_ambiguous {
            size -= 2;
        }
    }
    if opts.symbols {
        size += SYMBOLS.chars().count();
        if opts.exclude_ambiguous {
            size -= 1;
        }
    }
    size.max(1)
}
