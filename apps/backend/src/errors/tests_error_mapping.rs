// Unit tests for DomainError -> AppError mapping, no HTTP or database involved
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_kinds_to_400() {
    let cases = [
        (ValidationKind::InvalidPosition, ErrorCode::InvalidPosition),
        (ValidationKind::InvalidSlot, ErrorCode::InvalidSlot),
        (ValidationKind::InvalidPlayerName, ErrorCode::InvalidPlayerName),
        (
            ValidationKind::Other("anything".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::validation(kind, "bad input").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 400);
    }
}

#[test]
fn maps_conflicts() {
    let full = DomainError::conflict(ConflictKind::CapacityExceeded, "handler is full");
    let app: AppError = full.into();
    assert_eq!(app.code().as_str(), "CAPACITY_EXCEEDED");
    assert_eq!(app.status().as_u16(), 409);

    let unique = DomainError::conflict(ConflictKind::Unique, "duplicate");
    let app: AppError = unique.into();
    assert_eq!(app.code().as_str(), "UNIQUE_VIOLATION");

    let other = DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let nf = DomainError::not_found(NotFoundKind::Player, "no such player");
    let app: AppError = nf.into();
    assert_eq!(app.code().as_str(), "PLAYER_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let rec = DomainError::not_found(NotFoundKind::Record, "gone");
    let app: AppError = rec.into();
    assert_eq!(app.code().as_str(), "RECORD_NOT_FOUND");
}

#[test]
fn maps_infra() {
    let t = DomainError::infra(InfraErrorKind::Timeout, "timeout");
    let app: AppError = t.into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);
    assert!(matches!(app, AppError::Timeout { .. }));

    let down = DomainError::infra(InfraErrorKind::DbUnavailable, "down");
    let app: AppError = down.into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let corrupt = DomainError::infra(InfraErrorKind::DataCorruption, "bad row");
    let app: AppError = corrupt.into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let other = DomainError::infra(InfraErrorKind::Other("DbErr".into()), "failed");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "DB_ERROR");
}
