//! Auth Middleware
//!
//! Bearer-token gate for protected routes. On success the verified
//! [`SessionClaims`] are inserted into the request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::bearer::extract_bearer_token;
use std::sync::Arc;

use crate::application::session::{SessionClaims, SessionIssuer};
use crate::error::AuthError;

/// Middleware that requires a valid bearer token
pub async fn require_bearer_session(
    State(issuer): State<Arc<SessionIssuer>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let token = extract_bearer_token(req.headers()).ok_or(AuthError::MissingToken)?;
    let claims: SessionClaims = issuer.verify(&token)?;

    tracing::debug!(user_id = %claims.id, username = %claims.username, "Bearer session accepted");

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
