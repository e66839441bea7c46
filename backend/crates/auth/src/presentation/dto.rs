//! API DTOs (Data Transfer Objects)
//!
//! Wire shapes of `/api/auth`. Field names are camelCase on the wire.

use serde::{Deserialize, Serialize};

use crate::application::RegisterInput;
use crate::domain::entity::user::{PublicUser, User};
use crate::domain::value_object::{age::AgeInput, profile::ProfileInput};

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Missing required fields deserialize as empty and fail validation with a
/// field-specific message. Unknown fields such as `confirmPassword` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// JSON number or numeric string
    pub age: Option<AgeInput>,
    pub date_of_birth: Option<String>,
}

impl From<RegisterRequest> for RegisterInput {
    fn from(req: RegisterRequest) -> Self {
        RegisterInput {
            username: req.username,
            email: req.email,
            password: req.password,
            profile: ProfileInput {
                name: req.name,
                phone: req.phone,
                address: req.address,
                age: req.age,
                date_of_birth: req.date_of_birth,
            },
        }
    }
}

/// Register response (201)
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub username: String,
}

impl From<PublicUser> for RegisteredUser {
    fn from(user: PublicUser) -> Self {
        Self {
            id: user.id.value(),
            name: user.name,
            email: user.email.into_inner(),
            username: user.username.as_str().to_string(),
        }
    }
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: LoginUser,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub id: i64,
    /// Display name; the username when no name was given
    pub name: String,
    pub email: String,
    pub username: String,
    pub role: String,
}

impl From<PublicUser> for LoginUser {
    fn from(user: PublicUser) -> Self {
        let username = user.username.as_str().to_string();
        Self {
            id: user.id.value(),
            name: user.name.unwrap_or_else(|| username.clone()),
            email: user.email.into_inner(),
            username,
            role: user.role.code().to_string(),
        }
    }
}

// ============================================================================
// Current User
// ============================================================================

/// Current user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub success: bool,
    pub user: UserProfile,
}

/// Full record minus the password hash
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub username: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub age: Option<i32>,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub role: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            name: user.profile.name,
            email: user.email.into_inner(),
            username: user.username.as_str().to_string(),
            phone: user.profile.phone,
            address: user.profile.address,
            age: user.profile.age.map(|a| a.years()),
            date_of_birth: user
                .profile
                .date_of_birth
                .map(|d| d.format("%Y-%m-%d").to_string()),
            role: user.role.code().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_form_payload() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{
                "name": "Alice",
                "email": "a@x.com",
                "username": "alice",
                "password": "Str0ng!Pass",
                "confirmPassword": "Str0ng!Pass",
                "age": "29",
                "dateOfBirth": "1996-04-12"
            }"#,
        )
        .unwrap();

        assert_eq!(req.username, "alice");
        assert_eq!(req.age, Some(AgeInput::Text("29".into())));
        assert_eq!(req.date_of_birth.as_deref(), Some("1996-04-12"));
        assert!(req.phone.is_none());
    }

    #[test]
    fn test_register_request_missing_fields_default_empty() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.age.is_none());
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let profile = UserProfile {
            id: 1,
            name: None,
            email: "a@x.com".into(),
            username: "alice".into(),
            phone: None,
            address: None,
            age: Some(29),
            date_of_birth: Some("1996-04-12".into()),
            role: "user".into(),
        };
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["dateOfBirth"], "1996-04-12");
        assert!(json["name"].is_null());
    }
}
