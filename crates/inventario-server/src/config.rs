use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::http::HeaderValue;

const DEFAULT_HTTP_PORT: u16 = 8000;

/// Errors raised while building [`ServerConfig`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config: required environment variable {0} is not set")]
    MissingVar(&'static str),
    #[error("Config: {var} is invalid: {reason}")]
    InvalidVar { var: &'static str, reason: String },
}

/// Runtime configuration, built once at startup and carried in
/// [`crate::state::AppState`].
///
/// Nothing reads the process environment after [`ServerConfig::from_env`]
/// returns; tests construct the struct directly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub database_url: String,
    /// Static bearer token every `/api` request must present.
    pub api_token: String,
    /// Single allow-listed CORS origin; `None` allows any origin (dev mode).
    pub cors_allowed_origin: Option<HeaderValue>,
}

impl ServerConfig {
    /// Reads `DATABASE_URL`, `VALID_TOKEN` and the optional `HTTP_PORT` /
    /// `CORS_ALLOWED_ORIGIN` variables. Missing or malformed values are a
    /// startup error, never a panic inside a handler.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let api_token =
            std::env::var("VALID_TOKEN").map_err(|_| ConfigError::MissingVar("VALID_TOKEN"))?;
        if api_token.is_empty() {
            return Err(ConfigError::InvalidVar {
                var: "VALID_TOKEN",
                reason: "must not be empty".to_string(),
            });
        }

        let http_port = match std::env::var("HTTP_PORT") {
            Ok(raw) => raw.parse().map_err(|e| ConfigError::InvalidVar {
                var: "HTTP_PORT",
                reason: format!("{e}"),
            })?,
            Err(_) => DEFAULT_HTTP_PORT,
        };

        let cors_allowed_origin = match std::env::var("CORS_ALLOWED_ORIGIN") {
            Ok(raw) if !raw.is_empty() => {
                Some(
                    HeaderValue::from_str(&raw).map_err(|e| ConfigError::InvalidVar {
                        var: "CORS_ALLOWED_ORIGIN",
                        reason: format!("{e}"),
                    })?,
                )
            }
            _ => None,
        };

        Ok(Self {
            http_port,
            database_url,
            api_token,
            cors_allowed_origin,
        })
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.http_port)
    }
}
