//! Character variety section - tallies uppercase, lowercase, digit and special characters.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Longest run of adjacent decimal-digit code points in Unicode (five
/// stacked mathematical digit sets).
const MAX_DIGIT_RUN: u32 = 50;

/// True for any Unicode decimal digit (general category Nd).
pub fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Numeric value of a Unicode decimal digit, `None` for anything else.
///
/// Nd digits come in contiguous sets of ten starting at zero, so the value
/// is the offset from the start of the run modulo ten.
pub fn decimal_digit_value(c: char) -> Option<u32> {
    if !is_decimal_digit(c) {
        return None;
    }
    let code = c as u32;
    let offset = (1..=MAX_DIGIT_RUN)
        .take_while(|&back| {
            code.checked_sub(back)
                .and_then(char::from_u32)
                .is_some_and(is_decimal_digit)
        })
        .count() as u32;
    Some(offset % 10)
}

/// Per-class character tallies for a password.
///
/// Every character lands in exactly one bucket, so the four counts always
/// sum to the password's length in code points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterCounts {
    pub uppercase: usize,
    pub lowercase: usize,
    pub digits: usize,
    pub special: usize,
}

impl CharacterCounts {
    pub fn has_uppercase(&self) -> bool {
        self.uppercase > 0
    }

    pub fn has_lowercase(&self) -> bool {
        self.lowercase > 0
    }

    pub fn has_digits(&self) -> bool {
        self.digits > 0
    }

    pub fn has_special(&self) -> bool {
        self.special > 0
    }

    pub fn total(&self) -> usize {
        self.uppercase + self.lowercase + self.digits + self.special
    }

    /// Number of character classes present, 0 through 4.
    pub fn class_count(&self) -> usize {
        [
            self.has_uppercase(),
            self.has_lowercase(),
            self.has_digits(),
            self.has_special(),
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}

/// Classifies each character of the password in a single pass.
///
/// Anything that is not an uppercase letter, lowercase letter or decimal
/// digit counts as special, including whitespace and caseless letters.
pub fn character_variety_section(password: &str) -> CharacterCounts {
    password
        .chars()
        .fold(CharacterCounts::default(), |mut counts, c| {
            if c.is_uppercase() {
                counts.uppercase += 1;
            } else if c.is_lowercase() {
                counts.lowercase += 1;
            } else if is_decimal_digit(c) {
                counts.digits += 1;
            } else {
                counts.special += 1;
            }
            counts
        })
}
