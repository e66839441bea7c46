//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{config::AuthConfig, session::SessionIssuer};
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::require_bearer_session;

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Routes (relative to the mount point):
/// - `POST /register`
/// - `POST /login`
/// - `GET /me` (bearer token required)
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Send + Sync + 'static,
{
    let issuer = Arc::new(SessionIssuer::new(&config));
    let state = AuthAppState {
        repo: Arc::new(repo),
        issuer: issuer.clone(),
    };

    let protected = Router::new()
        .route("/me", get(handlers::current_user::<R>))
        .route_layer(middleware::from_fn_with_state(issuer, require_bearer_session));

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .merge(protected)
        .with_state(state)
}
