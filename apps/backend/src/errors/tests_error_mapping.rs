// Unit tests for error mapping - pure domain logic without HTTP plumbing
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::{AppError, ErrorCode};

#[test]
fn maps_rank_input_errors_to_400() {
    for (kind, code) in [
        (ValidationKind::EmptyInput, ErrorCode::EmptyInput),
        (ValidationKind::WrongCount, ErrorCode::WrongCount),
        (ValidationKind::OutOfRange, ErrorCode::OutOfRange),
        (ValidationKind::DuplicateRank, ErrorCode::DuplicateRank),
    ] {
        let app: AppError = DomainError::validation(kind, "bad ranks").into();
        assert_eq!(app.code(), code);
        assert_eq!(app.status().as_u16(), 400);
    }
}

#[test]
fn maps_rule_validation_to_422() {
    let app: AppError = DomainError::validation(ValidationKind::InvalidLevel, "Z").into();
    assert_eq!(app.code(), ErrorCode::InvalidLevel);
    assert_eq!(app.status().as_u16(), 422);

    let app: AppError =
        DomainError::validation(ValidationKind::Other("x".into()), "bad field").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status().as_u16(), 422);
}

#[test]
fn maps_conflicts() {
    let lock = DomainError::conflict(ConflictKind::OptimisticLock, "stale version");
    let app: AppError = lock.into();
    assert_eq!(app.code().as_str(), "OPTIMISTIC_LOCK");
    assert_eq!(app.status().as_u16(), 409);

    let other = DomainError::conflict(ConflictKind::Other("x".to_string()), "generic");
    let app: AppError = other.into();
    assert_eq!(app.code().as_str(), "CONFLICT");
    assert_eq!(app.status().as_u16(), 409);
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Room, "no room").into();
    assert_eq!(app.code().as_str(), "ROOM_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);

    let app: AppError = DomainError::not_found(NotFoundKind::Round, "nothing to undo").into();
    assert_eq!(app.code().as_str(), "ROUND_NOT_FOUND");
}
