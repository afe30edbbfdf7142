//! Wire shape of the identity claim carried inside access tokens.

use serde::{Deserialize, Serialize};

/// Claim set signed into every access token.
///
/// `username` and `id` are required: a token lacking either fails to
/// deserialize and is rejected like any other invalid token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    pub id: i32,
    /// Free-text role label; tokens minted elsewhere may omit it
    #[serde(default)]
    pub role: String,
    /// Issued-at (seconds since epoch)
    #[serde(default)]
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
