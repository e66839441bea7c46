//! User Name Value Object
//!
//! The login handle. 3 to 50 characters from `[A-Za-z0-9_]`, stored and
//! compared exactly as entered.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum length for user name
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name
pub const USER_NAME_MAX_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Validate a user name from input
    ///
    /// Surrounding whitespace is trimmed; nothing else is rewritten.
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(AppError::bad_request("Username is required"));
        }

        let length = name.chars().count();
        if length < USER_NAME_MIN_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username must be at least {} characters",
                USER_NAME_MIN_LENGTH
            )));
        }
        if length > USER_NAME_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "Username cannot exceed {} characters",
                USER_NAME_MAX_LENGTH
            )));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(AppError::bad_request(
                "Username can only contain letters, numbers and underscores",
            ));
        }

        Ok(Self(name.to_string()))
    }

    /// Restore from a trusted source (database row, verified token)
    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_user_names() {
        assert!(UserName::new("alice").is_ok());
        assert!(UserName::new("bob_42").is_ok());
        assert!(UserName::new("___").is_ok());
        assert!(UserName::new("A".repeat(USER_NAME_MAX_LENGTH)).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(UserName::new("ab").is_err());
        assert!(UserName::new("a".repeat(USER_NAME_MAX_LENGTH + 1)).is_err());
        assert!(UserName::new("   ").is_err());
    }

    #[test]
    fn test_invalid_characters() {
        for bad in ["alice!", "al ice", "alice.b", "alice-b", "ålice"] {
            let err = UserName::new(bad).unwrap_err();
            assert_eq!(
                err.message(),
                "Username can only contain letters, numbers and underscores",
                "{bad}"
            );
        }
    }

    #[test]
    fn test_case_preserved() {
        let name = UserName::new(" Alice_01 ").unwrap();
        assert_eq!(name.as_str(), "Alice_01");
    }
}
