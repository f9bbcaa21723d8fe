//! Pattern analysis section - detects sequential and repeated runs.

use super::variety::decimal_digit_value;

/// Minimum run length that counts as a pattern.
const RUN_LENGTH: usize = 3;

/// Weak-pattern flags for a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternFlags {
    pub sequential: bool,
    pub repeated: bool,
}

/// Analyzes the password for sequential and repeated runs of three.
pub fn pattern_analysis_section(password: &str) -> PatternFlags {
    PatternFlags {
        sequential: has_sequential_chars(password),
        repeated: has_repeated_chars(password),
    }
}

/// True when three steps are all +1 or all -1.
fn is_monotonic_step(a: i64, b: i64, c: i64) -> bool {
    (b == a + 1 && c == b + 1) || (b == a - 1 && c == b - 1)
}

/// Detects ascending or descending runs such as `abc`, `CBA` or `321`.
///
/// Two scans: one over the lowercased string comparing code points of any
/// three neighbours, one over the original string comparing the numeric
/// values of three decimal digits in a row, from any script (`1٢3`).
/// Interleaved runs like `a1b2c3` trigger neither.
pub fn has_sequential_chars(password: &str) -> bool {
    let lower: Vec<char> = password.to_lowercase().chars().collect();
    let code_point_run = lower
        .windows(RUN_LENGTH)
        .any(|w| is_monotonic_step(w[0] as i64, w[1] as i64, w[2] as i64));
    if code_point_run {
        return true;
    }

    let chars: Vec<char> = password.chars().collect();
    chars.windows(RUN_LENGTH).any(|w| {
        match (
            decimal_digit_value(w[0]),
            decimal_digit_value(w[1]),
            decimal_digit_value(w[2]),
        ) {
            (Some(d1), Some(d2), Some(d3)) => is_monotonic_step(d1 as i64, d2 as i64, d3 as i64),
            _ => false,
        }
    })
}

/// Detects three identical characters in a row, case-sensitively.
pub fn has_repeated_chars(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(RUN_LENGTH)
        .any(|w| w[0] == w[1] && w[1] == w[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_section_repetitive_chars() {
        let flags = pattern_analysis_section("xaaaBy");
        assert!(flags.repeated);
        assert!(!flags.sequential);
    }

    #[test]
    fn test_pattern_section_repeat_is_case_sensitive() {
        assert!(!has_repeated_chars("AaA"));
        assert!(has_repeated_chars("111"));
    }

    #[test]
    fn test_pattern_section_sequential_numbers() {
        assert!(has_sequential_chars("x123"));
        assert!(has_sequential_chars("x321"));
        assert!(!has_sequential_chars("135"));
    }

    #[test]
    fn test_pattern_section_sequential_mixed_script_digits() {
        // code points are not consecutive, digit values are
        assert!(has_sequential_chars("1٢3"));
        assert!(has_sequential_chars("x٣٢١"));
        assert!(has_sequential_chars("١٢٣"));
        assert!(!has_sequential_chars("1٢4"));
    }

    #[test]
    fn test_pattern_section_sequential_letters() {
        assert!(has_sequential_chars("abcTest"));
        assert!(has_sequential_chars("zYX"));
        assert!(has_sequential_chars("ABC"));
        assert!(!has_sequential_chars("abd"));
    }

    #[test]
    fn test_pattern_section_sequential_symbols() {
        // consecutive code points, not only letters
        assert!(has_sequential_chars("#$%"));
    }

    #[test]
    fn test_pattern_section_interleaved_is_not_sequential() {
        assert!(!has_sequential_chars("a1b2c3"));
    }

    #[test]
    fn test_pattern_section_strong_password() {
        let flags = pattern_analysis_section("RandomPass!Word");
        assert_eq!(flags, PatternFlags::default());
    }

    #[test]
    fn test_pattern_section_too_short() {
        assert_eq!(pattern_analysis_section("ab"), PatternFlags::default());
        assert_eq!(pattern_analysis_section("aa"), PatternFlags::default());
        assert_eq!(pattern_analysis_section(""), PatternFlags::default());
    }
}
