//! User Password Value Objects
//!
//! Domain wrappers over `platform::password`:
//! - [`RawPassword`] - clear text from a request, zeroized on drop
//! - [`UserPassword`] - Argon2id PHC hash as stored in the `users` table
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("Str0ng!Pass".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw).unwrap();
//! assert!(hashed.verify(&raw));
//! ```

use kernel::error::app_error::{AppError, AppResult};
use platform::password::{ClearTextPassword, HashedPassword, PasswordPolicyError};
use std::fmt;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Password for a new account; the full policy applies
    pub fn new(raw: String) -> AppResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(policy_error)
    }

    /// Password presented at login; only emptiness is rejected
    pub fn for_login(raw: String) -> AppResult<Self> {
        ClearTextPassword::for_verification(raw)
            .map(Self)
            .map_err(policy_error)
    }
}

fn policy_error(err: PasswordPolicyError) -> AppError {
    let action = match err {
        PasswordPolicyError::TooShort { .. } => "Please choose a longer password",
        PasswordPolicyError::TooLong { .. } => "Please choose a shorter password",
        PasswordPolicyError::Empty => "Please enter a password",
        _ => "Mix upper and lower case letters, numbers and a special character",
    };
    AppError::bad_request(err.to_string()).with_action(action)
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password for database storage
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password with a fresh salt
    pub fn from_raw(raw: &RawPassword) -> AppResult<Self> {
        raw.0
            .hash()
            .map(Self)
            .map_err(|e| AppError::internal("Password hashing failed").with_source(e))
    }

    /// Restore from the stored PHC string
    pub fn from_db(phc: impl Into<String>) -> AppResult<Self> {
        HashedPassword::from_phc_string(phc)
            .map(Self)
            .map_err(|e| AppError::internal("Stored password hash is corrupt").with_source(e))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Constant-time check of a raw password against this hash
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(&raw.0)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[HASH]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_errors_are_bad_requests() {
        let err = RawPassword::new("short".to_string()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "Password must be at least 8 characters");
        assert!(err.action().is_some());
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let raw = RawPassword::new("Str0ng!Pass".to_string()).unwrap();
        let hashed = UserPassword::from_raw(&raw).unwrap();
        assert_ne!(hashed.as_str(), "Str0ng!Pass");
        assert!(hashed.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_from_db() {
        let raw = RawPassword::new("Str0ng!Pass".to_string()).unwrap();
        let stored = UserPassword::from_raw(&raw).unwrap().as_str().to_string();

        let restored = UserPassword::from_db(stored).unwrap();
        assert!(restored.verify(&RawPassword::for_login("Str0ng!Pass".to_string()).unwrap()));
        assert!(!restored.verify(&RawPassword::for_login("str0ng!pass".to_string()).unwrap()));
    }

    #[test]
    fn test_corrupt_hash() {
        let err = UserPassword::from_db("plaintext").unwrap_err();
        assert!(err.is_server_error());
    }
}
