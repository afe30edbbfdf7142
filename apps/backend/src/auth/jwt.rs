use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::auth::claims::Claims;
use crate::auth::identity::Identity;
use crate::error::AppError;
use crate::logging::security;
use crate::state::security_config::SecurityConfig;

/// Sign an access token for the given identity, valid for `ttl` from `now`.
pub fn mint_access_token(
    username: &str,
    user_id: i32,
    role: &str,
    ttl: Duration,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|since| i64::try_from(since.as_secs()).ok())
        .ok_or_else(|| AppError::internal("system clock outside the token time range"))?;
    let exp = i64::try_from(ttl.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or_else(|| AppError::internal("token validity window out of range"))?;

    let claims = Claims {
        username: username.to_string(),
        id: user_id,
        role: role.to_string(),
        iat,
        exp,
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry (no leeway) and recover the caller identity.
///
/// Every rejection collapses to the same fault; the reason only goes to logs.
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<Identity, AppError> {
    let mut validation = Validation::new(security.algorithm);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| Identity::from(data.claims))
    .map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::ExpiredSignature => "token_expired",
            ErrorKind::InvalidSignature => "invalid_signature",
            ErrorKind::Json(_) | ErrorKind::MissingRequiredClaim(_) => "incomplete_claims",
            _ => "invalid_token",
        };
        security::token_rejected(reason);
        AppError::could_not_validate()
    })
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
    use serde_json::json;

    use super::{mint_access_token, verify_access_token};
    use crate::auth::claims::Claims;
    use crate::errors::ErrorCode;
    use crate::state::security_config::SecurityConfig;

    const SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";
    const TTL: Duration = Duration::from_secs(20 * 60);

    fn now_secs() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    fn raw_token(payload: serde_json::Value) -> String {
        encode(&Header::default(), &payload, &EncodingKey::from_secret(SECRET)).unwrap()
    }

    #[test]
    fn mint_and_verify_roundtrip() {
        let security = SecurityConfig::new(SECRET);
        let token =
            mint_access_token("alice", 7, "admin", TTL, SystemTime::now(), &security).unwrap();

        let identity = verify_access_token(&token, &security).unwrap();
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.id, 7);
        assert_eq!(identity.role, "admin");
    }

    #[test]
    fn exp_is_issuance_plus_window() {
        let security = SecurityConfig::new(SECRET);
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let token = mint_access_token("alice", 7, "admin", TTL, now, &security).unwrap();

        let mut validation = Validation::new(security.algorithm);
        validation.validate_exp = false;
        let claims = decode::<Claims>(&token, &DecodingKey::from_secret(SECRET), &validation)
            .unwrap()
            .claims;
        assert_eq!(claims.iat, 1_700_000_000);
        assert_eq!(claims.exp, 1_700_000_000 + 20 * 60);
    }

    #[test]
    fn oversized_window_is_an_error_not_a_dead_token() {
        let security = SecurityConfig::new(SECRET);
        for ttl in [Duration::from_secs(i64::MAX as u64), Duration::from_secs(u64::MAX)] {
            let err = mint_access_token("alice", 7, "admin", ttl, SystemTime::now(), &security)
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::Internal);
        }
    }

    #[test]
    fn expired_token_is_rejected() {
        let security = SecurityConfig::new(SECRET);
        let minted_at = SystemTime::now() - Duration::from_secs(21 * 60);
        let token = mint_access_token("alice", 7, "user", TTL, minted_at, &security).unwrap();

        let err = verify_access_token(&token, &security).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnauthorizedInvalidToken);
        assert_eq!(err.detail(), "Could not validate user.");
    }

    #[test]
    fn no_leeway_past_expiry() {
        let security = SecurityConfig::new(SECRET);
        let token = raw_token(json!({
            "username": "alice",
            "id": 7,
            "role": "user",
            "exp": now_secs() - 2,
        }));

        assert!(verify_access_token(&token, &security).is_err());
    }

    #[test]
    fn other_secret_is_rejected() {
        let token = mint_access_token(
            "alice",
            7,
            "user",
            TTL,
            SystemTime::now(),
            &SecurityConfig::new("secret-A"),
        )
        .unwrap();

        let err = verify_access_token(&token, &SecurityConfig::new("secret-B")).unwrap_err();
        assert_eq!(err.detail(), "Could not validate user.");
    }

    #[test]
    fn missing_username_or_id_matches_bad_signature_fault() {
        let security = SecurityConfig::new(SECRET);
        let exp = now_secs() + 600;

        let no_username = raw_token(json!({ "id": 7, "role": "user", "exp": exp }));
        let no_id = raw_token(json!({ "username": "alice", "role": "user", "exp": exp }));
        let null_id = raw_token(json!({ "username": "alice", "id": null, "exp": exp }));

        for token in [no_username, no_id, null_id] {
            let err = verify_access_token(&token, &security).unwrap_err();
            assert_eq!(err.code(), ErrorCode::UnauthorizedInvalidToken);
            assert_eq!(err.detail(), "Could not validate user.");
        }
    }

    #[test]
    fn missing_role_decodes_as_empty() {
        let security = SecurityConfig::new(SECRET);
        let token = raw_token(json!({ "username": "bob", "id": 3, "exp": now_secs() + 600 }));

        let identity = verify_access_token(&token, &security).unwrap();
        assert_eq!(identity.role, "");
    }

    #[test]
    fn garbage_is_rejected() {
        let security = SecurityConfig::new(SECRET);
        for token in ["", "abc", "a.b.c", "eyJhbGciOiJIUzI1NiJ9.e30."] {
            assert!(verify_access_token(token, &security).is_err());
        }
    }
}
