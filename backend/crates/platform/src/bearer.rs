//! Bearer Token Extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the bearer token from the `Authorization` header
///
/// Returns `None` when the header is absent, not valid UTF-8, uses another
/// scheme, or carries an empty token.
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();

    // Scheme is case-insensitive (RFC 9110 section 11.1)
    if value.len() < BEARER_PREFIX.len()
        || !value[..BEARER_PREFIX.len()].eq_ignore_ascii_case(BEARER_PREFIX)
    {
        return None;
    }

    let token = value[BEARER_PREFIX.len()..].trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Build an `Authorization` header value for a token
pub fn bearer_header_value(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_scheme_case_insensitive() {
        let headers = headers_with("bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn test_missing_or_foreign_scheme() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
        assert_eq!(extract_bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer_token(&headers_with("Bearer")), None);
    }

    #[test]
    fn test_bearer_header_value() {
        let value = bearer_header_value("tok");
        assert_eq!(extract_bearer_token(&headers_with(&value)), Some("tok".to_string()));
    }
}
