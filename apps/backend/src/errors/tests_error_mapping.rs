use actix_web::http::StatusCode;

use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;

#[test]
fn unique_email_conflict_maps_to_400() {
    let err: AppError =
        DomainError::conflict(ConflictKind::UniqueEmail, "Email already registered").into();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), ErrorCode::EmailAlreadyRegistered);
    assert_eq!(err.detail(), "Email already registered");
}

#[test]
fn other_conflict_maps_to_409() {
    let err: AppError =
        DomainError::conflict(ConflictKind::Other("Unique".into()), "dup").into();
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.code(), ErrorCode::UniqueViolation);
}

#[test]
fn not_found_kinds_keep_their_codes() {
    let todo: AppError = DomainError::not_found(NotFoundKind::Todo, "Todo not found.").into();
    assert_eq!(todo.status(), StatusCode::NOT_FOUND);
    assert_eq!(todo.code(), ErrorCode::TodoNotFound);

    let user: AppError = DomainError::not_found(NotFoundKind::User, "User not found.").into();
    assert_eq!(user.code(), ErrorCode::UserNotFound);
}

#[test]
fn validation_maps_to_400() {
    let err: AppError = DomainError::validation("priority must be between 1 and 5").into();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.code(), ErrorCode::ValidationError);
}

#[test]
fn infra_kinds_map_to_server_statuses() {
    let unavailable: AppError =
        DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable").into();
    assert_eq!(unavailable.status(), StatusCode::SERVICE_UNAVAILABLE);

    let timeout: AppError = DomainError::infra(InfraErrorKind::Timeout, "Database timeout").into();
    assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);

    let other: AppError =
        DomainError::infra(InfraErrorKind::Other("DbErr".into()), "Database operation failed")
            .into();
    assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(other.code(), ErrorCode::DbError);
}

#[test]
fn db_err_record_not_found_becomes_generic_404() {
    let err: AppError = sea_orm::DbErr::RecordNotFound("todos".into()).into();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.code(), ErrorCode::NotFound);
}
