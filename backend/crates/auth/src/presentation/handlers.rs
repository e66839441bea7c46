//! HTTP Handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::{
    CurrentUserUseCase, LoginInput, LoginUseCase, RegisterUseCase, SessionClaims, SessionIssuer,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    CurrentUserResponse, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

/// Shared state for auth handlers
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub issuer: Arc<SessionIssuer>,
}

// Manual impl: `R` itself need not be `Clone`
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            issuer: self.issuer.clone(),
        }
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<(StatusCode, Json<RegisterResponse>)>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = RegisterUseCase::new(state.repo.clone());
    let user = use_case.execute(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.issuer.clone());
    let output = use_case
        .execute(LoginInput {
            username: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user: output.user.into(),
        token: output.token,
    }))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
///
/// Claims are placed by `require_bearer_session`.
pub async fn current_user<R>(
    State(state): State<AuthAppState<R>>,
    Extension(claims): Extension<SessionClaims>,
) -> AuthResult<Json<CurrentUserResponse>>
where
    R: UserRepository + Send + Sync + 'static,
{
    let use_case = CurrentUserUseCase::new(state.repo.clone());
    let user = use_case.execute(&claims.username).await?;

    Ok(Json(CurrentUserResponse {
        success: true,
        user: user.into(),
    }))
}
