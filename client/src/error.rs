//! Client Error Types
//!
//! Internal to the client; public operations turn these into `false`/`None`
//! plus a notification.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Invalid session data: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Message suitable for a notification
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Http(e) if e.is_connect() || e.is_timeout() => {
                "Cannot reach the server. Please try again.".to_string()
            }
            _ => "Something went wrong. Please try again.".to_string(),
        }
    }
}
