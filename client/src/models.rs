//! Wire models shared with the server

use serde::{Deserialize, Serialize};

/// A portal user as returned by the server
///
/// Login returns the short form; `/me` fills in the profile fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
}

impl User {
    /// Name to greet the user with
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }
}

/// Validated registration payload
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationData {
    pub name: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub phone: String,
    pub address: String,
    pub age: u32,
    pub date_of_birth: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentUserResponse {
    pub user: User,
}
