//! Repository Traits
//!
//! Credential store interface. Implementations live in the infrastructure layer.

use crate::domain::entity::user::{NewUser, PublicUser, User};
use crate::domain::value_object::{email::Email, user_name::UserName};
use crate::error::AuthResult;

/// Credential store
///
/// Implementations must enforce uniqueness of username and email at insert
/// time and report violations as `DuplicateUsername` / `DuplicateEmail`
/// without storing anything.
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user and return its public projection
    async fn create(&self, user: &NewUser) -> AuthResult<PublicUser>;

    /// Find user by exact user name
    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>>;

    /// Find user by (lowercased) email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;
}
