//! User Entity
//!
//! A row of the `users` table. Rows are created once and never updated.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, profile::Profile, user_id::UserId, user_name::UserName,
    user_password::UserPassword, user_role::UserRole,
};

/// Persisted user
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: UserName,
    pub email: Email,
    /// Never leaves the server
    pub password_hash: UserPassword,
    pub profile: Profile,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.profile
            .name
            .as_deref()
            .unwrap_or(self.username.as_str())
    }

    /// Subset safe to return to clients
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            name: self.profile.name.clone(),
            role: self.role,
        }
    }
}

/// Validated registration data, ready to insert
///
/// Has no role field: the registration path always creates `user` accounts.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
    pub profile: Profile,
}

/// Public projection returned by the credential store on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicUser {
    pub id: UserId,
    pub username: UserName,
    pub email: Email,
    pub name: Option<String>,
    pub role: UserRole,
}
