//! Passphrase dictionary.

/// Lowercase words sampled by the passphrase generator.
pub const WORDLIST: &[&str] = &[
    "apple", "banana", "car", "delta", "echo", "forest", "grape", "hotel", "india", "jungle",
    "kite", "lemon", "mountain", "night", "orange", "pizza", "quiet", "river", "sun", "tree",
    "umbrella", "violet", "wolf", "xenon", "yellow", "zebra",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_six_lowercase_words() {
        assert_eq!(WORDLIST.len(), 26);
        assert!(
            WORDLIST
                .iter()
                .all(|w| !w.is_empty() && w.chars().all(|c| c.is_ascii_lowercase()))
        );
    }
}
