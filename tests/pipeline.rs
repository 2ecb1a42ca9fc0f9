use passgauge::strength::{self, patterns};
use passgauge::{Error, GenerationConfig, GenerationResult, Mode, Strength, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn full_charset_scores_ninety_symbols() {
    let result = generate(&GenerationConfig::default(), &mut rng(100)).unwrap();
    let expected = 16.0 * 90f64.log2();
    assert!((result.entropy_bits() - expected).abs() < 1e-9);
    assert!(result.entropy_bits() > 80.0);
    assert_eq!(result.secret().chars().count(), 16);
    let expected_strength = if result.patterns().is_empty() {
        Strength::Strong
    } else {
        Strength::Medium
    };
    assert_eq!(result.strength(), expected_strength);
}

#[test]
fn default_passphrase_is_weak() {
    let config = GenerationConfig {
        mode: Mode::Passphrase,
        ..Default::default()
    };
    let result = generate(&config, &mut rng(101)).unwrap();
    assert!((result.entropy_bits() - 4.0 * 26f64.log2()).abs() < 1e-9);
    assert!((result.entropy_bits() - 18.80).abs() < 0.01);
    assert_eq!(result.strength(), Strength::Weak);
    assert_eq!(result.secret().matches('-').count(), 3);
}

#[test]
fn long_passphrase_is_strong_even_with_patterns() {
    // 13 words: 13 * log2(26) = 61.1 bits.
    let config = GenerationConfig {
        mode: Mode::Passphrase,
        word_count: 13,
        separator: String::new(),
        ..Default::default()
    };
    let result = generate(&config, &mut rng(102)).unwrap();
    assert!(result.entropy_bits() > 60.0);
    assert_eq!(result.strength(), Strength::Strong);
}

#[test]
fn repeated_password_patterns() {
    let found = strength::detect_patterns("aaaaaaaaaaaaaaaa");
    assert!(found.contains(&patterns::REPEATED_CHARACTERS.to_string()));
    assert!(found.contains(&patterns::LOW_VARIETY.to_string()));
}

#[test]
fn denylist_needs_an_exact_match() {
    assert!(strength::detect_patterns("Password1").is_empty());
    assert_eq!(strength::detect_patterns("PASSWORD"), vec![patterns::COMMON_PASSWORD]);
}

#[test]
fn all_categories_disabled_is_empty_not_an_error() {
    let config = GenerationConfig {
        include_upper: false,
        include_lower: false,
        include_digits: false,
        include_symbols: false,
        ..Default::default()
    };
    let result = generate(&config, &mut rng(103)).unwrap();
    assert_eq!(result.secret(), "");
    assert_eq!(result.entropy_bits(), 0.0);
    assert_eq!(result.crack_time(), "0.00 seconds");
    assert!(result.patterns().is_empty());
    assert_eq!(result.strength(), Strength::Weak);
}

#[test]
fn ambiguous_exclusion_uses_fixed_pool_size() {
    let config = GenerationConfig {
        exclude_ambiguous: true,
        length: 20,
        ..Default::default()
    };
    let result = generate(&config, &mut rng(104)).unwrap();
    assert!((result.entropy_bits() - 20.0 * 83f64.log2()).abs() < 1e-9);
    assert!(!result.secret().contains(['O', '0', 'I', 'l', '1', '|']));
}

#[test]
fn crack_time_unit_boundaries() {
    let cases = [
        (59.0, "seconds"),
        (60.0, "minutes"),
        (3_599.0, "minutes"),
        (3_600.0, "hours"),
        (86_399.0, "hours"),
        (86_400.0, "days"),
        (31_535_999.0, "days"),
        (31_536_000.0, "years"),
    ];
    for (seconds, unit) in cases {
        let label = strength::format_seconds(seconds);
        assert!(label.ends_with(unit), "{seconds} -> {label}");
    }
}

#[test]
fn result_serializes_with_contract_field_names() {
    let result = GenerationResult::evaluate("aaaa".to_string(), Mode::Charset, 4.0);
    let value: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
    assert_eq!(value["secret"], "aaaa");
    assert_eq!(value["entropyBits"], 4.0);
    assert_eq!(value["crackTimeLabel"], "0.00 seconds");
    assert_eq!(
        value["detectedPatterns"],
        serde_json::json!(["Repeated characters", "Low character variety"])
    );
    assert_eq!(value["strengthLabel"], "Weak");
}

#[test]
fn json_request_round_trip_through_pipeline() {
    let config = GenerationConfig::from_json(
        r#"{"mode":"passphrase","wordCount":5,"separator":" ","capitalize":true}"#,
    )
    .unwrap();
    let result = generate(&config, &mut rng(105)).unwrap();
    let words: Vec<&str> = result.secret().split(' ').collect();
    assert_eq!(words.len(), 5);
    assert!(words.iter().all(|w| w.starts_with(|c: char| c.is_ascii_uppercase())));
}

#[test]
fn zero_word_count_is_a_validation_error() {
    let config = GenerationConfig {
        mode: Mode::Passphrase,
        word_count: 0,
        ..Default::default()
    };
    let err = generate(&config, &mut rng(106)).unwrap_err();
    assert!(matches!(err, Error::InvalidWordCount(0)));
    assert!(err.to_string().contains("at least one word"));
}
