//! Remediation suggestions derived from the analysis signals.

use std::fmt;

use crate::score::{Score, ScoreInputs, Verdict};

/// Entropy below which more randomness is recommended.
const LOW_ENTROPY: f64 = 30.0;
const MIN_LENGTH: usize = 8;
const RECOMMENDED_LENGTH: usize = 12;

/// A single piece of advice, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suggestion {
    Strong,
    CommonPassword,
    TooShort,
    ConsiderLonger,
    AddUppercase,
    AddLowercase,
    AddDigits,
    AddSpecial,
    AvoidSequential,
    AvoidRepeated,
    IncreaseRandomness,
}

/// How a suggestion should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Positive,
    Warning,
    Tip,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::Strong => "Excellent! Your password is strong.",
            Suggestion::CommonPassword => "This is a commonly used password. Choose something unique.",
            Suggestion::TooShort => "Use at least 8 characters (12+ recommended)",
            Suggestion::ConsiderLonger => "Consider using 12 or more characters for better security",
            Suggestion::AddUppercase => "Add uppercase letters (A-Z)",
            Suggestion::AddLowercase => "Add lowercase letters (a-z)",
            Suggestion::AddDigits => "Include numbers (0-9)",
            Suggestion::AddSpecial => "Add special characters (!@#$%^&*)",
            Suggestion::AvoidSequential => "Avoid sequential characters (abc, 123)",
            Suggestion::AvoidRepeated => "Avoid repeated characters (aaa, 111)",
            Suggestion::IncreaseRandomness => "Increase password randomness and variety",
        }
    }

    pub fn kind(&self) -> SuggestionKind {
        match self {
            Suggestion::Strong => SuggestionKind::Positive,
            Suggestion::CommonPassword => SuggestionKind::Warning,
            _ => SuggestionKind::Tip,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Suggestion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Builds the ordered suggestion list.
///
/// A strong score yields only the confirmation; otherwise each weakness
/// adds its advice in fixed priority order.
pub fn generate_suggestions(inputs: &ScoreInputs, score: Score) -> Vec<Suggestion> {
    if score.verdict() == Verdict::Strong {
        return vec![Suggestion::Strong];
    }

    let mut suggestions = Vec::new();

    if inputs.is_common {
        suggestions.push(Suggestion::CommonPassword);
    }

    if inputs.length < MIN_LENGTH {
        suggestions.push(Suggestion::TooShort);
    } else if inputs.length < RECOMMENDED_LENGTH {
        suggestions.push(Suggestion::ConsiderLonger);
    }

    let missing = [
        (inputs.has_uppercase, Suggestion::AddUppercase),
        (inputs.has_lowercase, Suggestion::AddLowercase),
        (inputs.has_digits, Suggestion::AddDigits),
        (inputs.has_special, Suggestion::AddSpecial),
    ];
    suggestions.extend(
        missing
            .into_iter()
            .filter(|(present, _)| !present)
            .map(|(_, suggestion)| suggestion),
    );

    if inputs.has_sequential {
        suggestions.push(Suggestion::AvoidSequential);
    }
    if inputs.has_repeated {
        suggestions.push(Suggestion::AvoidRepeated);
    }
    if inputs.entropy < LOW_ENTROPY {
        suggestions.push(Suggestion::IncreaseRandomness);
    }

    suggestions
}
