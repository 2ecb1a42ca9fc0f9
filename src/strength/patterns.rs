//! Weak pattern detection.

use std::collections::HashSet;

/// Passwords rejected outright, compared case-insensitively and exactly.
pub const COMMON_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "letmein"];

/// Keyboard and alphabet runs, matched anywhere case-insensitively.
pub const SEQUENCES: &[&str] = &["abcd", "1234", "qwer", "asdf"];

pub const COMMON_PASSWORD: &str = "Common password";
pub const REPEATED_CHARACTERS: &str = "Repeated characters";
pub const SEQUENTIAL_PATTERN: &str = "Sequential pattern";
pub const LOW_VARIETY: &str = "Low character variety";

/// Every weak pattern found in `password`, in check order.
pub fn detect_patterns(password: &str) -> Vec<String> {
    let lowered = password.to_lowercase();
    let mut patterns = Vec::new();

    if COMMON_PASSWORDS.contains(&lowered.as_str()) {
        patterns.push(COMMON_PASSWORD.to_string());
    }
    if is_single_repeated(password) {
        patterns.push(REPEATED_CHARACTERS.to_string());
    }
    if SEQUENCES.iter().any(|seq| lowered.contains(seq)) {
        patterns.push(SEQUENTIAL_PATTERN.to_string());
    }
    if is_low_variety(password) {
        patterns.push(LOW_VARIETY.to_string());
    }

    patterns
}

/// Non-empty and made of one character.
fn is_single_repeated(password: &str) -> bool {
    let mut chars = password.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Fewer distinct characters than half the length, rounded down.
fn is_low_variety(password: &str) -> bool {
    let distinct: HashSet<char> = password.chars().collect();
    distinct.len() < password.chars().count() / 2
}
