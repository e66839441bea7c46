//! In-Memory Repository Implementation
//!
//! Process-local credential store with the same uniqueness rules as the
//! `users` table. Backs the router tests and the client end-to-end suite.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, PublicUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user by name; returns whether a row was removed
    pub async fn remove(&self, username: &UserName) -> bool {
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| &u.username != username);
        users.len() != before
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &NewUser) -> AuthResult<PublicUser> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == user.username) {
            return Err(AuthError::DuplicateUsername);
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::DuplicateEmail);
        }

        let next_id = users.iter().map(|u| u.id.value()).max().unwrap_or(0) + 1;
        let created = User {
            id: UserId::new(next_id),
            username: user.username.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            profile: user.profile.clone(),
            role: UserRole::User,
            created_at: Utc::now(),
        };
        let public = created.public();
        users.push(created);

        Ok(public)
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }
}
