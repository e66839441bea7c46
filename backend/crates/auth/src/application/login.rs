//! Login Use Case
//!
//! Checks a username and password and issues a session token.

use std::sync::{Arc, OnceLock};

use crate::application::session::SessionIssuer;
use crate::domain::entity::user::PublicUser;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

const DECOY_PASSWORD: &str = "Decoy!Passw0rd";

/// Hash verified when no stored hash exists
///
/// Keeps unknown and malformed usernames on the same Argon2 cost as a
/// wrong password.
fn decoy_hash() -> Option<&'static UserPassword> {
    static DECOY: OnceLock<Option<UserPassword>> = OnceLock::new();
    DECOY
        .get_or_init(|| {
            RawPassword::new(DECOY_PASSWORD.to_string())
                .and_then(|raw| UserPassword::from_raw(&raw))
                .ok()
        })
        .as_ref()
}

/// Login input
#[derive(Debug, Default)]
pub struct LoginInput {
    pub username: String,
    pub password: String,
}

/// Login output
#[derive(Debug)]
pub struct LoginOutput {
    pub user: PublicUser,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    issuer: Arc<SessionIssuer>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, issuer: Arc<SessionIssuer>) -> Self {
        Self { user_repo, issuer }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        // A name that could never have been registered cannot match a row
        let username = UserName::new(&input.username).ok();
        let user = match &username {
            Some(name) => self.user_repo.find_by_username(name).await?,
            None => None,
        };

        let Ok(raw_password) = RawPassword::for_login(input.password) else {
            tracing::warn!(reason = "empty_password", "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let Some(user) = user else {
            if let Some(decoy) = decoy_hash() {
                decoy.verify(&raw_password);
            }
            match username {
                Some(name) => {
                    tracing::warn!(username = %name, reason = "unknown_user", "Login rejected")
                }
                None => tracing::warn!(reason = "malformed_username", "Login rejected"),
            }
            return Err(AuthError::InvalidCredentials);
        };

        if !user.password_hash.verify(&raw_password) {
            tracing::warn!(username = %user.username, reason = "wrong_password", "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.issuer.issue(user.id, &user.username, user.role)?;

        tracing::info!(user_id = %user.id, username = %user.username, "User logged in");

        Ok(LoginOutput {
            user: user.public(),
            token,
        })
    }
}
