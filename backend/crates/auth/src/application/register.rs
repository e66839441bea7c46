//! Register Use Case
//!
//! Creates a new `user` account.

use std::sync::Arc;

use crate::domain::entity::user::{NewUser, PublicUser};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    profile::{Profile, ProfileInput},
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Register input
#[derive(Debug, Default)]
pub struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub profile: ProfileInput,
}

/// Register use case
pub struct RegisterUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> RegisterUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<PublicUser> {
        // Validate request values
        let username = UserName::new(&input.username)?;
        let email = Email::new(input.email)?;
        let raw_password = RawPassword::new(input.password)?;
        let profile = Profile::from_input(input.profile)?;

        // Username is checked before email
        if self.user_repo.find_by_username(&username).await?.is_some() {
            return Err(AuthError::DuplicateUsername);
        }
        if self.user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = UserPassword::from_raw(&raw_password)?;

        // A concurrent insert can still win the race; the store reports it
        // as a duplicate.
        let user = self
            .user_repo
            .create(&NewUser {
                username,
                email,
                password_hash,
                profile,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User registered"
        );

        Ok(user)
    }
}
