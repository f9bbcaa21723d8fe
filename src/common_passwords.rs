//! Common password list management
//!
//! Holds the process-wide, read-only set of well-known weak passwords.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Environment variable naming an extra list file.
pub const COMMON_LIST_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

/// Passwords that are always treated as common, lowercase.
const BUILTIN_COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345", "1234567", "password1",
    "123123", "1234567890", "000000", "abc123", "password123", "qwerty", "qwerty123",
    "111111", "123321", "1234", "dragon", "1q2w3e4r", "sunshine", "654321", "master",
    "hello", "freedom", "whatever", "qazwsx", "trustno1", "jordan23", "harley",
    "password!", "letmein", "welcome", "monkey", "1qaz2wsx", "admin", "iloveyou",
    "mobile", "login", "passw0rd", "starwars", "batman", "football", "soccer",
];

static COMMON_PASSWORDS: OnceLock<CommonPasswords> = OnceLock::new();

#[derive(Error, Debug)]
pub enum CommonListError {
    #[error("Common password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password list: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password list is empty")]
    EmptyFile,
}

/// Immutable set of known weak passwords, matched case-insensitively.
#[derive(Debug, Clone)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// The curated built-in list.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_COMMON_PASSWORDS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Built-in list extended with one entry per non-empty line of `path`.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank lines
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonListError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common list load FAILED: FileNotFound {}", path.display());
            return Err(CommonListError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common list load FAILED: Empty file {}", path.display());
            return Err(CommonListError::EmptyFile);
        }

        let mut list = Self::builtin();
        list.entries.extend(
            content
                .lines()
                .map(|l| l.trim().to_lowercase())
                .filter(|l| !l.is_empty()),
        );
        Ok(list)
    }

    /// Case-insensitive, whole-string membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Returns the extra list path from `PWD_COMMON_PASSWORDS_PATH`, if set.
pub fn get_common_list_path() -> Option<PathBuf> {
    std::env::var_os(COMMON_LIST_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// Initializes the process-wide list, honouring `PWD_COMMON_PASSWORDS_PATH`.
///
/// Without the variable only the built-in list is installed. Calling this
/// after the list is already in place returns its size unchanged.
///
/// # Example
///
/// ```rust,no_run
/// let count = pwd_analyzer::init_common_passwords()?;
/// assert!(count > 0);
/// # Ok::<(), pwd_analyzer::CommonListError>(())
/// ```
pub fn init_common_passwords() -> Result<usize, CommonListError> {
    match get_common_list_path() {
        Some(path) => init_common_passwords_from_path(path),
        None => Ok(common_passwords().len()),
    }
}

/// Initializes the process-wide list from a specific file path.
///
/// The file extends the built-in list. Idempotent: if the list is already
/// initialized the file is not read.
pub fn init_common_passwords_from_path<P: AsRef<Path>>(path: P) -> Result<usize, CommonListError> {
    if let Some(existing) = COMMON_PASSWORDS.get() {
        return Ok(existing.len());
    }

    let list = CommonPasswords::from_path(path.as_ref())?;
    let count = COMMON_PASSWORDS.get_or_init(|| list).len();

    #[cfg(feature = "tracing")]
    tracing::info!("Common password list initialized: {} entries from {:?}", count, path.as_ref());

    Ok(count)
}

/// The process-wide list, defaulting to the built-in entries on first use.
pub fn common_passwords() -> &'static CommonPasswords {
    COMMON_PASSWORDS.get_or_init(CommonPasswords::builtin)
}

/// Checks if a password is in the process-wide common list.
pub fn is_common_password(password: &str) -> bool {
    common_passwords().contains(password)
}
