//! The analysis result record.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::score::{Score, ScoreInputs, Verdict};
use crate::sections::{CharacterCounts, PatternFlags};
use crate::suggestions::Suggestion;

const MASK_CHAR: char = '*';
const MASK_VISIBLE_MIN: usize = 4;

/// Immutable outcome of a single analysis.
///
/// Built once by [`crate::analyze`]; all fields are read through accessors.
pub struct AnalysisResult {
    pub(crate) password: SecretString,
    pub(crate) length: usize,
    pub(crate) entropy: f64,
    pub(crate) counts: CharacterCounts,
    pub(crate) patterns: PatternFlags,
    pub(crate) is_common: bool,
    pub(crate) score: Score,
    pub(crate) suggestions: Vec<Suggestion>,
}

impl AnalysisResult {
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    /// First and last character kept, everything else starred.
    ///
    /// Passwords of three characters or fewer are fully starred.
    pub fn masked_password(&self) -> String {
        let chars: Vec<char> = self.password.expose_secret().chars().collect();
        match (chars.first(), chars.last()) {
            (Some(first), Some(last)) if chars.len() >= MASK_VISIBLE_MIN => {
                let mut masked = String::with_capacity(chars.len());
                masked.push(*first);
                masked.extend(std::iter::repeat_n(MASK_CHAR, chars.len() - 2));
                masked.push(*last);
                masked
            }
            _ => std::iter::repeat_n(MASK_CHAR, chars.len()).collect(),
        }
    }

    /// Length in code points.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Entropy estimate in bits, rounded to two decimals.
    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    pub fn character_counts(&self) -> CharacterCounts {
        self.counts
    }

    pub fn uppercase_count(&self) -> usize {
        self.counts.uppercase
    }

    pub fn lowercase_count(&self) -> usize {
        self.counts.lowercase
    }

    pub fn digit_count(&self) -> usize {
        self.counts.digits
    }

    pub fn special_char_count(&self) -> usize {
        self.counts.special
    }

    pub fn has_uppercase(&self) -> bool {
        self.counts.has_uppercase()
    }

    pub fn has_lowercase(&self) -> bool {
        self.counts.has_lowercase()
    }

    pub fn has_digits(&self) -> bool {
        self.counts.has_digits()
    }

    pub fn has_special_chars(&self) -> bool {
        self.counts.has_special()
    }

    pub fn has_sequential_chars(&self) -> bool {
        self.patterns.sequential
    }

    pub fn has_repeated_chars(&self) -> bool {
        self.patterns.repeated
    }

    pub fn is_common_password(&self) -> bool {
        self.is_common
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn verdict(&self) -> Verdict {
        self.score.verdict()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// The signals the score was computed from.
    pub fn score_inputs(&self) -> ScoreInputs {
        ScoreInputs::new(self.length, &self.counts, self.entropy, self.is_common, &self.patterns)
    }
}

impl Clone for AnalysisResult {
    fn clone(&self) -> Self {
        Self {
            password: SecretString::new(self.password.expose_secret().into()),
            length: self.length,
            entropy: self.entropy,
            counts: self.counts,
            patterns: self.patterns,
            is_common: self.is_common,
            score: self.score,
            suggestions: self.suggestions.clone(),
        }
    }
}

impl PartialEq for AnalysisResult {
    fn eq(&self, other: &Self) -> bool {
        self.password.expose_secret() == other.password.expose_secret()
            && self.length == other.length
            && self.entropy == other.entropy
            && self.counts == other.counts
            && self.patterns == other.patterns
            && self.is_common == other.is_common
            && self.score == other.score
            && self.suggestions == other.suggestions
    }
}

impl fmt::Debug for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisResult")
            .field("password", &self.password)
            .field("length", &self.length)
            .field("entropy", &self.entropy)
            .field("counts", &self.counts)
            .field("patterns", &self.patterns)
            .field("is_common", &self.is_common)
            .field("score", &self.score)
            .field("verdict", &self.verdict())
            .field("suggestions", &self.suggestions)
            .finish()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResultView<'a> {
    masked_password: String,
    length: usize,
    entropy: f64,
    uppercase_count: usize,
    lowercase_count: usize,
    digit_count: usize,
    special_char_count: usize,
    has_uppercase: bool,
    has_lowercase: bool,
    has_digits: bool,
    has_special_chars: bool,
    has_sequential_chars: bool,
    has_repeated_chars: bool,
    is_common_password: bool,
    score: Score,
    verdict: Verdict,
    suggestions: &'a [Suggestion],
}

#[cfg(feature = "serde")]
impl serde::Serialize for AnalysisResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        AnalysisResultView {
            masked_password: self.masked_password(),
            length: self.length,
            entropy: self.entropy,
            uppercase_count: self.uppercase_count(),
            lowercase_count: self.lowercase_count(),
            digit_count: self.digit_count(),
            special_char_count: self.special_char_count(),
            has_uppercase: self.has_uppercase(),
            has_lowercase: self.has_lowercase(),
            has_digits: self.has_digits(),
            has_special_chars: self.has_special_chars(),
            has_sequential_chars: self.has_sequential_chars(),
            has_repeated_chars: self.has_repeated_chars(),
            is_common_password: self.is_common,
            score: self.score,
            verdict: self.verdict(),
            suggestions: &self.suggestions,
        }
        .serialize(serializer)
    }
}
