//! Score calculation and verdict mapping.
//!
//! The weighting policy is a fixed, ordered table of [`ScoreRule`] rows.
//! Every row whose predicate holds contributes its points; the sum is
//! clamped to `0..=100` once at the end.

use std::fmt;

use crate::sections::{CharacterCounts, PatternFlags};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 100;

/// Signals the score is computed from. Never carries password content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreInputs {
    pub length: usize,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub entropy: f64,
    pub is_common: bool,
    pub has_sequential: bool,
    pub has_repeated: bool,
}

impl ScoreInputs {
    pub fn new(
        length: usize,
        counts: &CharacterCounts,
        entropy: f64,
        is_common: bool,
        patterns: &PatternFlags,
    ) -> Self {
        Self {
            length,
            has_uppercase: counts.has_uppercase(),
            has_lowercase: counts.has_lowercase(),
            has_digits: counts.has_digits(),
            has_special: counts.has_special(),
            entropy,
            is_common,
            has_sequential: patterns.sequential,
            has_repeated: patterns.repeated,
        }
    }

    fn class_count(&self) -> usize {
        [self.has_lowercase, self.has_uppercase, self.has_digits, self.has_special]
            .iter()
            .filter(|&&b| b)
            .count()
    }
}

/// One row of the weighting table.
#[derive(Clone, Copy)]
pub struct ScoreRule {
    pub name: &'static str,
    pub points: i32,
    pub applies: fn(&ScoreInputs) -> bool,
}

impl fmt::Debug for ScoreRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreRule")
            .field("name", &self.name)
            .field("points", &self.points)
            .finish()
    }
}

const fn rule(name: &'static str, points: i32, applies: fn(&ScoreInputs) -> bool) -> ScoreRule {
    ScoreRule { name, points, applies }
}

pub const SCORE_RULES: &[ScoreRule] = &[
    // Length (max 30)
    rule("length >= 16", 30, |s| s.length >= 16),
    rule("length 12..16", 25, |s| (12..16).contains(&s.length)),
    rule("length 8..12", 15, |s| (8..12).contains(&s.length)),
    rule("length 6..8", 5, |s| (6..8).contains(&s.length)),
    // Character diversity (max 40)
    rule("has lowercase", 10, |s| s.has_lowercase),
    rule("has uppercase", 10, |s| s.has_uppercase),
    rule("has digits", 10, |s| s.has_digits),
    rule("has special", 10, |s| s.has_special),
    // Entropy (max 20)
    rule("entropy > 60", 20, |s| s.entropy > 60.0),
    rule("entropy 40..=60", 15, |s| s.entropy > 40.0 && s.entropy <= 60.0),
    rule("entropy 20..=40", 10, |s| s.entropy > 20.0 && s.entropy <= 40.0),
    rule("entropy 10..=20", 5, |s| s.entropy > 10.0 && s.entropy <= 20.0),
    // Penalties
    rule("common password", -50, |s| s.is_common),
    rule("sequential characters", -10, |s| s.has_sequential),
    rule("repeated characters", -10, |s| s.has_repeated),
    // Variety bonus (max 10)
    rule("all 4 classes", 10, |s| s.class_count() == 4),
    rule("3 classes", 5, |s| s.class_count() == 3),
];

/// Rows of [`SCORE_RULES`] that applied, in table order.
pub fn breakdown(inputs: &ScoreInputs) -> Vec<(&'static str, i32)> {
    SCORE_RULES
        .iter()
        .filter(|rule| (rule.applies)(inputs))
        .map(|rule| (rule.name, rule.points))
        .collect()
}

/// Sums the applicable rules and clamps the result to `0..=100`.
pub fn calculate_score(inputs: &ScoreInputs) -> Score {
    let raw: i32 = breakdown(inputs).iter().map(|(_, points)| points).sum();
    Score::new(raw)
}

/// Password score, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Score(u8);

impl Score {
    /// Clamps `raw` into range.
    pub fn new(raw: i32) -> Self {
        Self(raw.clamp(MIN_SCORE, MAX_SCORE) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_score(*self)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Qualitative strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Verdict {
    Weak,
    Medium,
    Strong,
}

impl Verdict {
    pub const STRONG_THRESHOLD: u8 = 80;
    pub const MEDIUM_THRESHOLD: u8 = 50;

    pub fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= Self::STRONG_THRESHOLD => Verdict::Strong,
            s if s >= Self::MEDIUM_THRESHOLD => Verdict::Medium,
            _ => Verdict::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Weak => "WEAK",
            Verdict::Medium => "MEDIUM",
            Verdict::Strong => "STRONG",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
