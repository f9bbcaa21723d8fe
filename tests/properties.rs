//! Property-based tests for pwd-analyzer.

use proptest::prelude::*;
use pwd_analyzer::score::{breakdown, calculate_score};
use pwd_analyzer::{analyze, CommonPasswords, ScoreInputs, Verdict};

fn expected_verdict(score: u8) -> Verdict {
    if score >= 80 {
        Verdict::Strong
    } else if score >= 50 {
        Verdict::Medium
    } else {
        Verdict::Weak
    }
}

proptest! {
    // ========================
    // Result Invariants
    // ========================

    #[test]
    fn score_is_bounded(s in "\\PC*") {
        let result = analyze(&s);
        prop_assert!(result.score().value() <= 100);
    }

    #[test]
    fn counts_partition_length(s in "\\PC*") {
        let result = analyze(&s);
        let sum = result.uppercase_count()
            + result.lowercase_count()
            + result.digit_count()
            + result.special_char_count();
        prop_assert_eq!(sum, result.length());
        prop_assert_eq!(result.length(), s.chars().count());
    }

    #[test]
    fn has_flags_match_counts(s in "\\PC*") {
        let result = analyze(&s);
        prop_assert_eq!(result.has_uppercase(), result.uppercase_count() > 0);
        prop_assert_eq!(result.has_lowercase(), result.lowercase_count() > 0);
        prop_assert_eq!(result.has_digits(), result.digit_count() > 0);
        prop_assert_eq!(result.has_special_chars(), result.special_char_count() > 0);
    }

    #[test]
    fn verdict_follows_score(s in "\\PC*") {
        let result = analyze(&s);
        prop_assert_eq!(result.verdict(), expected_verdict(result.score().value()));
    }

    #[test]
    fn entropy_is_non_negative_and_two_decimals(s in "\\PC*") {
        let entropy = analyze(&s).entropy();
        prop_assert!(entropy >= 0.0);
        let scaled = entropy * 100.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-6);
    }

    #[test]
    fn short_strings_have_no_patterns(s in "\\PC{0,2}") {
        let result = analyze(&s);
        prop_assert!(!result.has_sequential_chars());
        prop_assert!(!result.has_repeated_chars());
    }

    #[test]
    fn analyze_is_idempotent(s in "\\PC*") {
        prop_assert_eq!(analyze(&s), analyze(&s));
    }

    #[test]
    fn common_match_ignores_case(idx in 0usize..4, upper in any::<bool>()) {
        let words = ["password", "qwerty", "letmein", "football"];
        let word = if upper { words[idx].to_uppercase() } else { words[idx].to_string() };
        prop_assert!(analyze(&word).is_common_password());
        let suffixed = format!("{}x", word);
        prop_assert!(!analyze(&suffixed).is_common_password());
    }

    #[test]
    fn strong_results_have_single_suggestion(s in "\\PC*") {
        let result = analyze(&s);
        if result.verdict() == Verdict::Strong {
            prop_assert_eq!(result.suggestions().len(), 1);
        }
    }

    // ========================
    // Score Function Properties
    // ========================

    #[test]
    fn score_is_clamped_breakdown_sum(
        length in 0usize..64,
        has_uppercase in any::<bool>(),
        has_lowercase in any::<bool>(),
        has_digits in any::<bool>(),
        has_special in any::<bool>(),
        entropy in 0.0f64..200.0,
        is_common in any::<bool>(),
        has_sequential in any::<bool>(),
        has_repeated in any::<bool>(),
    ) {
        let inputs = ScoreInputs {
            length,
            has_uppercase,
            has_lowercase,
            has_digits,
            has_special,
            entropy,
            is_common,
            has_sequential,
            has_repeated,
        };
        let raw: i32 = breakdown(&inputs).iter().map(|(_, p)| p).sum();
        prop_assert_eq!(calculate_score(&inputs).value() as i32, raw.clamp(0, 100));
    }

    #[test]
    fn score_ignores_password_text_beyond_signals(s in "[a-z]{8,20}") {
        let result = analyze(&s);
        let recomputed = calculate_score(&result.score_inputs());
        prop_assert_eq!(result.score(), recomputed);
    }
}

#[test]
fn builtin_list_is_not_empty() {
    assert!(!CommonPasswords::builtin().is_empty());
}
