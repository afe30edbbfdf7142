use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Record a failed credential exchange. `reason` is never returned to the client.
pub fn login_failed(reason: &str, username: Option<&str>) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        username = %username.map(Redacted).unwrap_or(Redacted("")),
        reason,
        "Authentication failure"
    );
}

/// Record a token that was presented but rejected by the gate.
pub fn token_rejected(reason: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason,
        "Token rejected"
    );
}

/// Record an authenticated caller hitting a route their role does not allow.
pub fn role_denied(user_id: i32, role: &str, required: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_ROLE_DENIED",
        %trace_id,
        user_id,
        role,
        required,
        "Role check failed"
    );
}
