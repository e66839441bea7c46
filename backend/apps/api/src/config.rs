//! Server configuration from the environment

use std::env;
use std::str::FromStr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use platform::jwt::MIN_SECRET_LENGTH;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

#[derive(Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub port: u16,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment (after `.env` is loaded)
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            database_url,
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                env::var("DATABASE_MAX_CONNECTIONS").ok(),
                DEFAULT_MAX_CONNECTIONS,
            )?,
            port: parse_or("PORT", env::var("PORT").ok(), DEFAULT_PORT)?,
            frontend_origins: split_origins(
                &env::var("FRONTEND_ORIGINS").unwrap_or_else(|_| DEFAULT_FRONTEND_ORIGINS.into()),
            ),
            auth: auth_config(env::var("JWT_SECRET").ok(), cfg!(debug_assertions))?,
        })
    }
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} is not a valid value: {raw}")),
        _ => Ok(default),
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

/// Release builds refuse to start without a strong secret
fn auth_config(secret: Option<String>, development: bool) -> anyhow::Result<AuthConfig> {
    match secret {
        Some(secret) if secret.len() >= MIN_SECRET_LENGTH => Ok(AuthConfig::new(secret.into_bytes())),
        Some(_) => bail!("JWT_SECRET must be at least {MIN_SECRET_LENGTH} bytes"),
        None if development => {
            tracing::warn!("JWT_SECRET not set, using a random secret; tokens will not survive a restart");
            Ok(AuthConfig::with_random_secret())
        }
        None => bail!("JWT_SECRET must be set in production"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or("PORT", None, 5000u16).unwrap(), 5000);
        assert_eq!(parse_or("PORT", Some(" ".into()), 5000u16).unwrap(), 5000);
        assert_eq!(parse_or("PORT", Some("8081".into()), 5000u16).unwrap(), 8081);
        assert!(parse_or("PORT", Some("http".into()), 5000u16).is_err());
    }

    #[test]
    fn test_split_origins() {
        assert_eq!(
            split_origins(DEFAULT_FRONTEND_ORIGINS),
            vec!["http://localhost:8080", "http://127.0.0.1:8080"]
        );
        assert_eq!(split_origins(" https://a.dev , ,"), vec!["https://a.dev"]);
    }

    #[test]
    fn test_auth_config_secret_rules() {
        let strong = "k".repeat(MIN_SECRET_LENGTH);
        assert_eq!(
            auth_config(Some(strong.clone()), false).unwrap().jwt_secret,
            strong.into_bytes()
        );
        assert!(auth_config(Some("short".into()), true).is_err());
        assert!(auth_config(None, false).is_err());
        assert_eq!(auth_config(None, true).unwrap().jwt_secret.len(), 32);
    }
}
