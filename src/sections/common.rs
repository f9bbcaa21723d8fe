//! Common password section - checks membership in a known-weak list.

use crate::common_passwords::CommonPasswords;

/// Returns `true` if the whole password is in `list`, ignoring case.
pub fn common_password_section(password: &str, list: &CommonPasswords) -> bool {
    list.contains(password)
}
