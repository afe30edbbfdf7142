//! Process configuration read once at startup.

use std::env;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST")
            .ok()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a port number, got: '{raw}'"))
            })?,
            _ => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }
}

/// Signing settings from `BACKEND_JWT_SECRET`, which is required.
pub fn security_from_env() -> Result<SecurityConfig, AppError> {
    let secret = env::var("BACKEND_JWT_SECRET").map_err(|_| {
        AppError::config("Required environment variable 'BACKEND_JWT_SECRET' is not set")
    })?;
    if secret.is_empty() {
        return Err(AppError::config("BACKEND_JWT_SECRET must not be empty"));
    }
    Ok(SecurityConfig::new(secret.into_bytes()))
}

/// Browser origins allowed by CORS, from comma-separated `CORS_ALLOWED_ORIGINS`.
///
/// Entries that are empty, `null` or not http(s) are dropped.
pub fn cors_allowed_origins() -> Vec<String> {
    parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
