//! Auth Client
//!
//! Talks to `/api/auth` and keeps the login session in a [`SessionStorage`].
//! Public operations never return errors: failures are reported through the
//! [`Notifier`] and surface as `false` / `None`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, ClientResult};
use crate::models::{
    Credentials, CurrentUserResponse, LoginResponse, MessageResponse, RegistrationData, User,
};
use crate::notify::Notifier;
use crate::session::Session;
use crate::storage::SessionStorage;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct AuthClient {
    http: reqwest::Client,
    api_url: String,
    storage: Arc<dyn SessionStorage>,
    notifier: Arc<dyn Notifier>,
    session: Option<Session>,
}

impl AuthClient {
    /// Create a client and restore any stored session
    ///
    /// `api_url` is the server root, e.g. `http://localhost:5000`.
    pub fn new(
        api_url: impl Into<String>,
        storage: Arc<dyn SessionStorage>,
        notifier: Arc<dyn Notifier>,
    ) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let session = Session::restore(storage.as_ref());

        Ok(Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            storage,
            notifier,
            session,
        })
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    /// User saved at login, without contacting the server
    pub fn cached_user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// POST /api/auth/register
    pub async fn register(&self, data: &RegistrationData) -> bool {
        let request = self.http.post(self.endpoint("register")).json(data);

        match send::<MessageResponse>(request).await {
            Ok(_) => {
                tracing::info!(username = %data.username, "Registered");
                self.notifier.success("Registration successful! Please log in.");
                true
            }
            Err(e) => {
                tracing::warn!(username = %data.username, error = %e, "Registration failed");
                self.notifier.error(&e.user_message());
                false
            }
        }
    }

    /// POST /api/auth/login
    ///
    /// On failure the existing session, if any, is left untouched.
    pub async fn login(&mut self, credentials: &Credentials) -> Option<User> {
        let request = self.http.post(self.endpoint("login")).json(credentials);

        let response = match send::<LoginResponse>(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(username = %credentials.username, error = %e, "Login failed");
                self.notifier.error(&e.user_message());
                return None;
            }
        };

        if let Some(message) = &response.message {
            tracing::debug!(%message, "Login response");
        }

        let session = Session {
            user: response.user,
            token: response.token,
        };
        if let Err(e) = session.persist(self.storage.as_ref()) {
            tracing::warn!(error = %e, "Session could not be persisted");
        }

        self.notifier.success(&format!(
            "Welcome back, {}!",
            session.user.display_name()
        ));
        let user = session.user.clone();
        self.session = Some(session);
        Some(user)
    }

    /// Forget the session; safe to call when logged out
    pub fn logout(&mut self) {
        self.session = None;
        Session::clear(self.storage.as_ref());
        self.notifier.info("You have been logged out");
    }

    /// GET /api/auth/me with the stored token
    pub async fn current_user(&self) -> Option<User> {
        let token = self.token()?;
        let request = self.http.get(self.endpoint("me")).bearer_auth(token);

        match send::<CurrentUserResponse>(request).await {
            Ok(response) => Some(response.user),
            Err(e) => {
                tracing::debug!(error = %e, "Current user unavailable");
                None
            }
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/auth/{}", self.api_url, path)
    }
}

async fn send<T: DeserializeOwned>(request: RequestBuilder) -> ClientResult<T> {
    let response = request.send().await?;
    if response.status().is_success() {
        Ok(response.json::<T>().await?)
    } else {
        Err(api_error(response).await)
    }
}

/// Server message from an error envelope, or the status text
async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let message = response
        .json::<MessageResponse>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}
