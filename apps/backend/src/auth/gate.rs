//! The authentication & authorization gate.
//!
//! Four operations, all stateless between requests:
//! credential verification against the store, token issuance, token
//! decoding into an [`Identity`], and role checks.

use std::time::{Duration, SystemTime};

use sea_orm::ConnectionTrait;
use tracing::debug;

pub use crate::auth::identity::require_role;
use crate::auth::identity::Identity;
use crate::auth::jwt::{mint_access_token, verify_access_token};
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

/// Look up `username` (first match) and check `password` against its hash.
///
/// `Ok(None)` covers both an unknown username and a wrong password; callers
/// cannot tell them apart. `Err` is reserved for store failures.
pub async fn verify_credentials<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<Option<User>, AppError> {
    let Some(user) = users::find_user_by_username(conn, username).await? else {
        debug!(username = %Redacted(username), "credential check: no such user");
        return Ok(None);
    };

    if verify_password(password, &user.hashed_password) {
        Ok(Some(user))
    } else {
        debug!(user_id = user.id, "credential check: password mismatch");
        Ok(None)
    }
}

/// Sign a token for the identity, expiring `validity` from now.
pub fn issue_token(
    username: &str,
    user_id: i32,
    role: &str,
    validity: Duration,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    mint_access_token(username, user_id, role, validity, SystemTime::now(), security)
}

/// Validate a presented token and recover the caller.
pub fn decode_and_authorize(token: &str, security: &SecurityConfig) -> Result<Identity, AppError> {
    verify_access_token(token, security)
}
