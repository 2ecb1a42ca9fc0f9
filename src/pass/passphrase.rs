//! Passphrase generation.

use rand::Rng;
use tracing::debug;

use super::wordlist::WORDLIST;

/// Join `word_count` words drawn with replacement from [`WORDLIST`].
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    word_count: usize,
    separator: &str,
    capitalize: bool,
) -> String {
    generate_from_words(rng, WORDLIST, word_count, separator, capitalize)
}

/// Same as [`generate`] over an arbitrary dictionary.
pub fn generate_from_words<R: Rng + ?Sized>(
    rng: &mut R,
    words: &[&str],
    word_count: usize,
    separator: &str,
    capitalize: bool,
) -> String {
    if words.is_empty() {
        return String::new();
    }
    debug!(words = word_count, dictionary = words.len(), "passphrase");

    let picked: Vec<String> = (0..word_count)
        .map(|_| {
            let word = words[rng.gen_range(0..words.len())];
            if capitalize {
                capitalize_word(word)
            } else {
                word.to_string()
            }
        })
        .collect();

    picked.join(separator)
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
