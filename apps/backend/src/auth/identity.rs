use serde::Serialize;

use crate::auth::claims::Claims;
use crate::error::AppError;
use crate::logging::security;

pub const ADMIN_ROLE: &str = "admin";

/// Caller identity recovered from a validated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<Claims> for Identity {
    fn from(c: Claims) -> Self {
        Self {
            id: c.id,
            username: c.username,
            role: c.role,
        }
    }
}

impl Identity {
    pub fn has_role(&self, expected: &str) -> bool {
        self.role == expected
    }
}

/// Flat string equality; there is no role hierarchy.
pub fn require_role(identity: &Identity, expected: &str) -> Result<(), AppError> {
    if identity.has_role(expected) {
        Ok(())
    } else {
        security::role_denied(identity.id, &identity.role, expected);
        Err(AppError::insufficient_role())
    }
}
