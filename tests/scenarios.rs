//! End-to-end scenarios through the public API.

use pwd_analyzer::{analyze, Suggestion, Verdict};

#[test]
fn common_password_is_clamped_to_zero() {
    let result = analyze("password");

    assert_eq!(result.length(), 8);
    assert!(result.has_lowercase());
    assert!(!result.has_uppercase() && !result.has_digits() && !result.has_special_chars());
    assert_eq!(result.entropy(), 22.0);
    assert!(result.is_common_password());
    assert!(!result.has_sequential_chars());
    assert!(!result.has_repeated_chars());
    assert_eq!(result.score().value(), 0);
    assert_eq!(result.verdict(), Verdict::Weak);
}

#[test]
fn common_password_matches_any_case_but_not_extensions() {
    assert!(analyze("PASSWORD").is_common_password());
    assert!(analyze("password").is_common_password());
    assert!(!analyze("passwordx").is_common_password());
}

#[test]
fn empty_password_is_degenerate_weak() {
    let result = analyze("");

    assert_eq!(result.length(), 0);
    assert_eq!(result.entropy(), 0.0);
    assert!(!result.has_uppercase());
    assert!(!result.has_lowercase());
    assert!(!result.has_digits());
    assert!(!result.has_special_chars());
    assert!(!result.has_sequential_chars());
    assert!(!result.has_repeated_chars());
    assert_eq!(result.score().value(), 0);
    assert_eq!(result.verdict(), Verdict::Weak);
}

#[test]
fn short_mixed_sequence() {
    let result = analyze("123abc");

    assert_eq!(result.length(), 6);
    assert!(result.has_lowercase());
    assert!(result.has_digits());
    assert!(!result.has_uppercase());
    assert!(!result.has_special_chars());
    assert!((result.entropy() - 15.51).abs() < 1e-9);
    assert!(result.has_sequential_chars());
    assert!(!result.has_repeated_chars());
    assert!(!result.is_common_password());
    assert_eq!(result.score().value(), 20);
    assert_eq!(result.verdict(), Verdict::Weak);
    assert_eq!(
        result.suggestions(),
        [
            Suggestion::TooShort,
            Suggestion::AddUppercase,
            Suggestion::AddSpecial,
            Suggestion::AvoidSequential,
            Suggestion::IncreaseRandomness,
        ]
    );
}

#[test]
fn long_diverse_password_is_strong() {
    let result = analyze("Rq8!vN3@kW6#hZ1$");

    assert!(result.length() >= 16);
    assert!(result.has_uppercase() && result.has_lowercase());
    assert!(result.has_digits() && result.has_special_chars());
    assert!(!result.has_sequential_chars());
    assert!(!result.has_repeated_chars());
    assert!(!result.is_common_password());
    assert!(result.entropy() > 60.0);
    assert_eq!(result.score().value(), 100);
    assert_eq!(result.verdict(), Verdict::Strong);
    assert_eq!(result.suggestions(), [Suggestion::Strong]);
}

#[test]
fn interleaved_sequence_is_not_flagged() {
    assert!(!analyze("a1b2c3").has_sequential_chars());
}

#[test]
fn repeated_run_penalized() {
    let plain = analyze("Zq7!Lp4@");
    let repeated = analyze("Zq7!LLL@");

    assert!(!plain.has_repeated_chars());
    assert!(repeated.has_repeated_chars());
    assert!(repeated.suggestions().contains(&Suggestion::AvoidRepeated));
}

#[test]
fn non_ascii_digits_count_as_digits() {
    let result = analyze("١٢٣");

    assert_eq!(result.digit_count(), 3);
    assert_eq!(result.special_char_count(), 0);
    assert!(result.has_digits());
    assert!(!result.has_special_chars());
    assert!(result.has_sequential_chars());
    assert!(!result.suggestions().contains(&Suggestion::AddDigits));
    assert!(result.suggestions().contains(&Suggestion::AddSpecial));
}

#[test]
fn mixed_script_digit_run_is_sequential() {
    let result = analyze("1٢3");

    assert_eq!(result.digit_count(), 3);
    assert!(result.has_sequential_chars());
}
