//! Session Issuer
//!
//! Signs and verifies the stateless bearer tokens handed out at login.
//! Nothing is stored server-side; a token is valid until `exp`.

use chrono::Utc;
use platform::jwt::JwtCodec;
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::{user_id::UserId, user_name::UserName, user_role::UserRole};
use crate::error::AuthResult;

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub id: UserId,
    pub username: UserName,
    pub role: UserRole,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expires at (unix seconds)
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct SessionIssuer {
    codec: JwtCodec,
    ttl_secs: i64,
}

impl SessionIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            codec: JwtCodec::new(&config.jwt_secret),
            ttl_secs: config.token_ttl_secs(),
        }
    }

    /// Sign a token for `{id, username, role}` expiring after the configured TTL
    pub fn issue(&self, id: UserId, username: &UserName, role: UserRole) -> AuthResult<String> {
        let iat = Utc::now().timestamp();
        let claims = SessionClaims {
            id,
            username: username.clone(),
            role,
            iat,
            exp: iat + self.ttl_secs,
        };
        Ok(self.codec.encode(&claims)?)
    }

    /// Check signature and expiry
    ///
    /// Fails with `InvalidToken` or `ExpiredToken`.
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        Ok(self.codec.decode(token)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use std::time::Duration;

    fn issuer_with_ttl(ttl: Duration) -> SessionIssuer {
        let mut config = AuthConfig::new(b"0123456789abcdef0123456789abcdef".to_vec());
        config.token_ttl = ttl;
        SessionIssuer::new(&config)
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer_with_ttl(Duration::from_secs(7 * 24 * 3600));
        let username = UserName::new("alice").unwrap();

        let token = issuer.issue(UserId::new(1), &username, UserRole::User).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.id, UserId::new(1));
        assert_eq!(claims.username, username);
        assert_eq!(claims.role, UserRole::User);
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_expired_token() {
        let issuer = issuer_with_ttl(Duration::ZERO);
        let token = issuer
            .issue(UserId::new(1), &UserName::new("alice").unwrap(), UserRole::Admin)
            .unwrap();

        std::thread::sleep(Duration::from_millis(1100));
        assert!(matches!(issuer.verify(&token), Err(AuthError::ExpiredToken)));
    }

    #[test]
    fn test_tampered_token() {
        let issuer = issuer_with_ttl(Duration::from_secs(60));
        let token = issuer
            .issue(UserId::new(1), &UserName::new("alice").unwrap(), UserRole::User)
            .unwrap();

        let mut parts: Vec<&str> = token.split('.').collect();
        parts[2] = "c2lnbmF0dXJl";
        let forged = parts.join(".");

        assert!(matches!(issuer.verify(&forged), Err(AuthError::InvalidToken)));
    }
}
