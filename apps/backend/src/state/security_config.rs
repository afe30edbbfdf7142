use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Validity window for issued access tokens.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(20 * 60);

/// Token signing settings, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: Vec<u8>,
    pub algorithm: Algorithm,
    pub access_token_ttl: Duration,
}

impl SecurityConfig {
    /// HS256 with the default 20 minute window.
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            access_token_ttl: ACCESS_TOKEN_TTL,
        }
    }
}
