//! Entropy estimates.

/// Entropy in bits of `length` symbols drawn from `charset_size` choices.
pub fn calculate_entropy(length: usize, charset_size: usize) -> f64 {
    if length == 0 || charset_size == 0 {
        return 0.0;
    }
    length as f64 * (charset_size as f64).log2()
}

/// Entropy of a generated charset password.
///
/// Zero for an empty secret, otherwise one `log2(charset_size)` per character.
pub fn password_entropy(password: &str, charset_size: usize) -> f64 {
    calculate_entropy(password.chars().count(), charset_size)
}

/// Entropy of `word_count` words drawn from a `wordlist_size` dictionary.
pub fn passphrase_entropy(word_count: usize, wordlist_size: usize) -> f64 {
    calculate_entropy(word_count, wordlist_size)
}
