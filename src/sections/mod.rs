//! Password analysis sections
//!
//! Each section extracts one independent signal from the raw password.

mod common;
mod entropy;
mod pattern;
mod variety;

pub use common::common_password_section;
pub use entropy::entropy_section;
pub use pattern::{has_repeated_chars, has_sequential_chars, pattern_analysis_section, PatternFlags};
pub use variety::{character_variety_section, CharacterCounts};
