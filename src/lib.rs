//! Password strength analysis library
//!
//! Local, deterministic heuristics only: character classes, a Shannon
//! entropy estimate, sequential and repeated run detection, and a
//! case-insensitive common password check combine into a `0..=100` score,
//! a `WEAK`/`MEDIUM`/`STRONG` verdict and ordered remediation suggestions.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable analysis over a channel
//! - `cli` (default): Builds the `pwd-analyzer` binary and console renderer
//! - `serde`: Serializes `AnalysisResult` with camelCase field names
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Optional file whose lines extend the
//!   built-in common password list
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze, Verdict};
//!
//! let result = analyze("password");
//! assert!(result.is_common_password());
//! assert_eq!(result.score().value(), 0);
//! assert_eq!(result.verdict(), Verdict::Weak);
//!
//! for suggestion in result.suggestions() {
//!     println!("{}", suggestion);
//! }
//! ```

// Internal modules
mod analyzer;
mod common_passwords;
mod result;
mod sections;

pub mod score;
pub mod suggestions;

#[cfg(feature = "cli")]
pub mod report;

// Public API
pub use analyzer::{analyze, analyze_secret, analyze_with};
pub use common_passwords::{
    common_passwords, get_common_list_path, init_common_passwords, init_common_passwords_from_path,
    is_common_password, CommonListError, CommonPasswords, COMMON_LIST_ENV,
};
pub use result::AnalysisResult;
pub use score::{Score, ScoreInputs, Verdict};
pub use sections::{
    character_variety_section, entropy_section, has_repeated_chars, has_sequential_chars,
    pattern_analysis_section, CharacterCounts, PatternFlags,
};
pub use suggestions::{Suggestion, SuggestionKind};

#[cfg(feature = "async")]
pub use analyzer::{analyze_debounced_tx, DEFAULT_DEBOUNCE};
