//! JSON Web Token Codec
//!
//! HS256 signing and verification over caller-defined claim types.
//! Claim types must carry a numeric `exp` field; expiry is always validated.

use std::fmt;

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Minimum accepted secret length in bytes
pub const MIN_SECRET_LENGTH: usize = 32;

/// Token verification/signing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Signature valid but `exp` has passed
    #[error("Token has expired")]
    Expired,

    /// Malformed token, bad signature, wrong algorithm or bad claims
    #[error("Token is invalid")]
    Invalid,

    /// Signing failed
    #[error("Token signing failed: {0}")]
    Signing(String),
}

/// HS256 encoder/decoder bound to one secret
#[derive(Clone)]
pub struct JwtCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtCodec {
    /// Create a codec from a shared secret
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Sign claims into a compact JWT
    pub fn encode<C: Serialize>(&self, claims: &C) -> Result<String, JwtError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| JwtError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, then decode the claims
    pub fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, JwtError> {
        jsonwebtoken::decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::Invalid,
            })
    }
}

impl fmt::Debug for JwtCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtCodec")
            .field("algorithm", &"HS256")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
