//! Error codes for the to-do backend API.
//!
//! Every code that can appear in a Problem Details body lives here.
//! Add new codes to this enum; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, rendered as SCREAMING_SNAKE_CASE strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Username or password did not match a stored user
    InvalidCredentials,
    /// Authorization header absent or not a Bearer credential
    UnauthorizedMissingBearer,
    /// Token signature, shape, expiry or claims were rejected
    UnauthorizedInvalidToken,
    /// Caller's role does not match the required role
    InsufficientRole,
    /// Current password supplied to a password change did not verify
    InvalidPassword,

    // Request Validation
    /// Path todo id is not a positive integer
    InvalidTodoId,
    /// General validation error
    ValidationError,
    /// Malformed request body or query
    BadRequest,
    /// Email is already taken by another user
    EmailAlreadyRegistered,

    // Resource Not Found
    /// Task does not exist or is not visible to the caller
    TodoNotFound,
    /// User referenced by the token no longer exists
    UserNotFound,
    /// Generic not found
    NotFound,

    // Conflicts
    /// Unique constraint violated
    UniqueViolation,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Stored data could not be interpreted
    DataCorruption,
    /// Internal server error
    Internal,
    /// Process configuration error
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidToken => "UNAUTHORIZED_INVALID_TOKEN",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::InvalidPassword => "INVALID_PASSWORD",

            Self::InvalidTodoId => "INVALID_TODO_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",

            Self::TodoNotFound => "TODO_NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueViolation => "UNIQUE_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// All codes, used by uniqueness checks.
    pub const ALL: &'static [ErrorCode] = &[
        Self::InvalidCredentials,
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedInvalidToken,
        Self::InsufficientRole,
        Self::InvalidPassword,
        Self::InvalidTodoId,
        Self::ValidationError,
        Self::BadRequest,
        Self::EmailAlreadyRegistered,
        Self::TodoNotFound,
        Self::UserNotFound,
        Self::NotFound,
        Self::UniqueViolation,
        Self::DbError,
        Self::DbUnavailable,
        Self::DbTimeout,
        Self::DataCorruption,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::InvalidCredentials.as_str(), "INVALID_CREDENTIALS");
        assert_eq!(
            ErrorCode::UnauthorizedInvalidToken.as_str(),
            "UNAUTHORIZED_INVALID_TOKEN"
        );
        assert_eq!(ErrorCode::InsufficientRole.as_str(), "INSUFFICIENT_ROLE");
        assert_eq!(ErrorCode::TodoNotFound.as_str(), "TODO_NOT_FOUND");
        assert_eq!(
            ErrorCode::EmailAlreadyRegistered.as_str(),
            "EMAIL_ALREADY_REGISTERED"
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        for code in ErrorCode::ALL {
            assert_eq!(code.to_string(), code.as_str());
        }
    }

    #[test]
    fn test_codes_are_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }
}
