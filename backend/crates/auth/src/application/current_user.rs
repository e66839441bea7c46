//! Current User Use Case
//!
//! Loads the full record for the username carried by a verified token.

use std::sync::Arc;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

pub struct CurrentUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> CurrentUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// The account may have been removed after the token was issued
    pub async fn execute(&self, username: &UserName) -> AuthResult<User> {
        self.user_repo
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)
    }
}
