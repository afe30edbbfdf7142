//! Token helpers for tests.

use std::time::{Duration, SystemTime};

use backend::auth::jwt::mint_access_token;
use backend::state::security_config::SecurityConfig;

const TTL: Duration = Duration::from_secs(20 * 60);

pub fn mint_test_token(username: &str, id: i32, role: &str, sec: &SecurityConfig) -> String {
    mint_access_token(username, id, role, TTL, SystemTime::now(), sec)
        .expect("should mint token successfully")
}

/// Full Authorization header value including the "Bearer " prefix.
pub fn bearer_header(username: &str, id: i32, role: &str, sec: &SecurityConfig) -> String {
    format!("Bearer {}", mint_test_token(username, id, role, sec))
}

/// Token whose window closed an hour ago.
pub fn mint_expired_token(username: &str, id: i32, role: &str, sec: &SecurityConfig) -> String {
    let minted_at = SystemTime::now() - Duration::from_secs(3600) - TTL;
    mint_access_token(username, id, role, TTL, minted_at, sec)
        .expect("should mint expired token successfully")
}
