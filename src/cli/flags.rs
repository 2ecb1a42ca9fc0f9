use clap::Parser;
use passgauge::{GenerationConfig, Mode};

/// Generate passwords or passphrases and report how strong they are.
#[derive(Debug, Parser)]
#[command(name = "passgauge", version, about)]
pub struct CliFlags {
    /// Characters per password.
    #[arg(short, long, env = "PASSGAUGE_LENGTH", default_value_t = 16)]
    pub length: usize,

    /// Leave out uppercase letters.
    #[arg(long, env = "PASSGAUGE_NO_UPPER")]
    pub no_upper: bool,

    /// Leave out lowercase letters.
    #[arg(long, env = "PASSGAUGE_NO_LOWER")]
    pub no_lower: bool,

    /// Leave out digits.
    #[arg(long, env = "PASSGAUGE_NO_DIGITS")]
    pub no_digits: bool,

    /// Leave out symbols.
    #[arg(long, env = "PASSGAUGE_NO_SYMBOLS")]
    pub no_symbols: bool,

    /// Drop look-alike characters (O 0 I l 1 |).
    #[arg(short = 'a', long, env = "PASSGAUGE_EXCLUDE_AMBIGUOUS")]
    pub exclude_ambiguous: bool,

    /// Never repeat the previous character.
    #[arg(long, env = "PASSGAUGE_NO_REPEAT")]
    pub no_repeat: bool,

    /// Never follow a character with the next code point (a then b).
    #[arg(long, env = "PASSGAUGE_NO_SEQUENCE")]
    pub no_sequence: bool,

    /// Generate a word passphrase instead of a password.
    #[arg(short, long, env = "PASSGAUGE_PASSPHRASE")]
    pub passphrase: bool,

    /// Words per passphrase.
    #[arg(short, long, env = "PASSGAUGE_WORDS", default_value_t = 4)]
    pub words: usize,

    /// Text placed between passphrase words.
    #[arg(long, env = "PASSGAUGE_SEPARATOR", default_value = "-", allow_hyphen_values = true)]
    pub separator: String,

    /// Uppercase the first letter of each word.
    #[arg(short = 'C', long, env = "PASSGAUGE_CAPITALIZE")]
    pub capitalize: bool,

    /// How many secrets to generate.
    #[arg(short, long, default_value_t = 1)]
    pub number: usize,

    /// Seed a deterministic generator for reproducible output.
    #[arg(long, env = "PASSGAUGE_SEED")]
    pub seed: Option<u64>,

    /// Print one JSON object per secret.
    #[arg(long)]
    pub json: bool,

    /// Copy to clipboard instead of printing.
    #[arg(short = 'b', long)]
    pub board: bool,

    /// Suppress all output except secrets.
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliFlags {
    /// The generation request described by these flags.
    pub fn config(&self) -> GenerationConfig {
        GenerationConfig {
            mode: if self.passphrase {
                Mode::Passphrase
            } else {
                Mode::Charset
            },
            length: self.length,
            include_upper: !self.no_upper,
            include_lower: !self.no_lower,
            include_digits: !self.no_digits,
            include_symbols: !self.no_symbols,
            exclude_ambiguous: self.exclude_ambiguous,
            no_repeat: self.no_repeat,
            no_sequence: self.no_sequence,
            word_count: self.words,
            separator: self.separator.clone(),
            capitalize: self.capitalize,
        }
    }
}
