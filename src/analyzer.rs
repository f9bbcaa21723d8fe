//! Password analyzer - sequences the sections and assembles the result.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::common_passwords::{common_passwords, CommonPasswords};
use crate::result::AnalysisResult;
use crate::score::{calculate_score, ScoreInputs};
use crate::sections::{
    character_variety_section, common_password_section, entropy_section, pattern_analysis_section,
};
use crate::suggestions::generate_suggestions;

/// Default wait before analyzing in [`analyze_debounced_tx`].
#[cfg(feature = "async")]
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Analyzes a password against the process-wide common password list.
///
/// Total over all strings: the empty string yields a zero score and a
/// `WEAK` verdict rather than an error.
pub fn analyze(password: &str) -> AnalysisResult {
    analyze_with(password, common_passwords())
}

/// Same as [`analyze`] for a password already wrapped in a secret.
pub fn analyze_secret(password: &SecretString) -> AnalysisResult {
    analyze(password.expose_secret())
}

/// Analyzes a password against an explicit common password list.
pub fn analyze_with(password: &str, common: &CommonPasswords) -> AnalysisResult {
    // Independent signals
    let length = password.chars().count();
    let counts = character_variety_section(password);
    let entropy = entropy_section(password);
    let patterns = pattern_analysis_section(password);
    let is_common = common_password_section(password, common);

    // Derived from signals only
    let inputs = ScoreInputs::new(length, &counts, entropy, is_common, &patterns);
    let score = calculate_score(&inputs);
    let suggestions = generate_suggestions(&inputs, score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score = score.value(), verdict = %score.verdict(), "password analyzed");

    AnalysisResult {
        password: SecretString::new(password.into()),
        length,
        entropy,
        counts,
        patterns,
        is_common,
        score,
        suggestions,
    }
}

/// Waits `delay`, then analyzes and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses.
/// Returns `true` when a result was delivered.
#[cfg(feature = "async")]
pub async fn analyze_debounced_tx(
    password: SecretString,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<AnalysisResult>,
) -> bool {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("analysis cancelled before start");
            return false;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let result = analyze_secret(&password);

    match tx.send(result).await {
        Ok(()) => true,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password analysis result: {}", _e);
            false
        }
    }
}
