//! Persisted login session
//!
//! A session is the `user` and `token` entries of a [`SessionStorage`].
//! Both must be present and the user must parse; anything else is treated
//! as logged out.

use crate::error::ClientResult;
use crate::models::User;
use crate::storage::SessionStorage;

pub const USER_KEY: &str = "user";
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    /// Load the stored session; malformed or partial entries are removed
    pub fn restore(storage: &dyn SessionStorage) -> Option<Self> {
        let user = storage.get(USER_KEY);
        let token = storage.get(TOKEN_KEY);

        match (user, token) {
            (None, None) => None,
            (Some(user), Some(token)) if !token.trim().is_empty() => {
                match serde_json::from_str::<User>(&user) {
                    Ok(user) => Some(Self {
                        user,
                        token: token.trim().to_string(),
                    }),
                    Err(e) => {
                        tracing::warn!(error = %e, "Discarding unreadable stored user");
                        Self::clear(storage);
                        None
                    }
                }
            }
            _ => {
                tracing::warn!("Discarding incomplete stored session");
                Self::clear(storage);
                None
            }
        }
    }

    pub fn persist(&self, storage: &dyn SessionStorage) -> ClientResult<()> {
        storage.set(USER_KEY, &serde_json::to_string(&self.user)?)?;
        storage.set(TOKEN_KEY, &self.token)?;
        Ok(())
    }

    pub fn clear(storage: &dyn SessionStorage) {
        storage.remove(USER_KEY);
        storage.remove(TOKEN_KEY);
    }
}
