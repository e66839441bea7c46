//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Use cases (register, login, current user) and the session issuer
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, bearer middleware, router
//!
//! ## Features
//! - Registration with username, email, password and optional profile
//! - Login by username + password, answered with a signed JWT
//! - `GET /me` for the bearer of a valid token
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, never returned
//! - Stateless HS256 tokens, 7 day lifetime, no revocation
//! - Unknown user and wrong password produce the same response

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::router::{auth_router, auth_router_generic};

pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
