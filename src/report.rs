//! Console output formatting for analysis results.
//!
//! Rendering only reads the result; nothing here alters scores or flags.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use crate::result::AnalysisResult;
use crate::score::{breakdown, Score, Verdict};
use crate::suggestions::SuggestionKind;

const BAR_WIDTH: usize = 50;
const RULE: &str = "─────────────────────────────────────────────────────";

/// Banner shown when the interactive loop starts.
pub fn welcome_banner() -> String {
    let line = "═══════════════════════════════════════════════════════";
    let mut out = String::new();
    let _ = writeln!(out, "{line}");
    let _ = writeln!(out, "           {}", "PASSWORD STRENGTH ANALYZER".bold());
    let _ = writeln!(out, "{line}");
    let _ = writeln!(out, "Analyze your password security with comprehensive metrics");
    let _ = writeln!(out, "{line}");
    out
}

fn verdict_label(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::Strong => "✓ STRONG (Excellent security!)".green().bold(),
        Verdict::Medium => "⚠ MEDIUM (Good, but can improve)".yellow().bold(),
        Verdict::Weak => "✗ WEAK (Needs improvement!)".red().bold(),
    }
}

/// `[███░░░] 60%` style bar; filled cells are `score / 100 * width`, truncated.
pub fn progress_bar(score: Score) -> String {
    let filled = score.value() as usize * BAR_WIDTH / 100;
    format!(
        "[{}{}] {}%",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH - filled),
        score.value()
    )
}

fn check_line(out: &mut String, label: &str, passed: bool) {
    let (icon, status) = if passed {
        ("✓".green(), "PASS".green())
    } else {
        ("✗".red(), "FAIL".red())
    };
    let _ = writeln!(out, "│  {icon} {label:<38} [{status}]");
}

fn section_header(out: &mut String, title: &str) {
    let _ = writeln!(out, "\n┌── {} ──", title.bold());
}

fn section_footer(out: &mut String) {
    let _ = writeln!(out, "└{RULE}");
}

/// Full text report for one analysis.
pub fn render_text(result: &AnalysisResult, explain: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "PASSWORD ANALYSIS RESULTS".bold());
    let _ = writeln!(out, "\nPassword: {}", result.masked_password());

    let _ = writeln!(out, "\n┌{RULE}");
    let _ = writeln!(
        out,
        "│  SCORE: {}/100  VERDICT: {}",
        result.score(),
        verdict_label(result.verdict())
    );
    let _ = writeln!(out, "└{RULE}");
    let _ = writeln!(out, "\n{}", progress_bar(result.score()));

    section_header(&mut out, "METRICS");
    let _ = writeln!(out, "│  Length:         {:<3} characters", result.length());
    let _ = writeln!(out, "│  Entropy:        {:.2} bits", result.entropy());
    let _ = writeln!(out, "│  Uppercase:      {:<3}", result.uppercase_count());
    let _ = writeln!(out, "│  Lowercase:      {:<3}", result.lowercase_count());
    let _ = writeln!(out, "│  Numbers:        {:<3}", result.digit_count());
    let _ = writeln!(out, "│  Special Chars:  {:<3}", result.special_char_count());
    section_footer(&mut out);

    section_header(&mut out, "SECURITY CHECKS");
    check_line(&mut out, "Contains uppercase letters", result.has_uppercase());
    check_line(&mut out, "Contains lowercase letters", result.has_lowercase());
    check_line(&mut out, "Contains numbers", result.has_digits());
    check_line(&mut out, "Contains special characters", result.has_special_chars());
    check_line(&mut out, "No sequential characters", !result.has_sequential_chars());
    check_line(&mut out, "No repeated characters", !result.has_repeated_chars());
    check_line(&mut out, "Not a common password", !result.is_common_password());
    section_footer(&mut out);

    if explain {
        section_header(&mut out, "SCORE BREAKDOWN");
        for (name, points) in breakdown(&result.score_inputs()) {
            let _ = writeln!(out, "│  {name:<38} {points:+}");
        }
        section_footer(&mut out);
    }

    if !result.suggestions().is_empty() {
        section_header(&mut out, "SUGGESTIONS");
        for suggestion in result.suggestions() {
            let marker = match suggestion.kind() {
                SuggestionKind::Positive => "✓".green(),
                SuggestionKind::Warning => "⚠".yellow(),
                SuggestionKind::Tip => "•".normal(),
            };
            let _ = writeln!(out, "│  {marker} {suggestion}");
        }
        section_footer(&mut out);
    }

    out
}

/// Pretty JSON report; carries the masked password, never the raw one.
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
