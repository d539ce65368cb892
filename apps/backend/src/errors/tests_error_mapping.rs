//! Mapping tests: every domain error kind resolves to its own stable code.

use crate::domain::location::GridLocation;
use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;

fn code_of(err: &DomainError) -> ErrorCode {
    ErrorCode::from(err)
}

#[test]
fn validation_kinds_map_to_distinct_codes() {
    let at = GridLocation::new(3, 4).unwrap();
    let cases = vec![
        (ValidationKind::OutOfGrid, ErrorCode::OutOfGrid),
        (ValidationKind::LocationFormat, ErrorCode::LocationFormat),
        (ValidationKind::ShipOutOfGrid, ErrorCode::ShipOutOfGrid),
        (ValidationKind::ShipOverlap { at }, ErrorCode::ShipOverlap),
        (
            ValidationKind::ShipAlreadyDeployed,
            ErrorCode::ShipAlreadyDeployed,
        ),
        (ValidationKind::SamePlayer, ErrorCode::SamePlayer),
        (
            ValidationKind::Other("x".into()),
            ErrorCode::ValidationError,
        ),
    ];
    for (kind, expected) in cases {
        let err = DomainError::validation(kind, "detail");
        assert_eq!(code_of(&err), expected);
    }
}

#[test]
fn conflict_kinds_map_to_distinct_codes() {
    let cases = vec![
        (ConflictKind::NotPlayerTurn, ErrorCode::NotPlayerTurn),
        (ConflictKind::BattleEnded, ErrorCode::BattleEnded),
        (
            ConflictKind::UnexpectedBattlePhase,
            ErrorCode::UnexpectedBattlePhase,
        ),
        (ConflictKind::OptimisticLock, ErrorCode::OptimisticLock),
        (ConflictKind::UniqueName, ErrorCode::UniqueName),
        (ConflictKind::Other("x".into()), ErrorCode::Conflict),
    ];
    for (kind, expected) in cases {
        let err = DomainError::conflict(kind, "detail");
        assert_eq!(code_of(&err), expected);
    }
}

#[test]
fn not_found_kinds_map_to_distinct_codes() {
    let cases = vec![
        (NotFoundKind::Battle, ErrorCode::BattleNotFound),
        (NotFoundKind::Fleet, ErrorCode::FleetNotFound),
        (NotFoundKind::Ship, ErrorCode::ShipNotFound),
        (NotFoundKind::Player, ErrorCode::PlayerNotFound),
        (NotFoundKind::Other("x".into()), ErrorCode::NotFound),
    ];
    for (kind, expected) in cases {
        let err = DomainError::not_found(kind, "detail");
        assert_eq!(code_of(&err), expected);
    }
}

#[test]
fn infra_kinds_map_to_distinct_codes() {
    assert_eq!(
        code_of(&DomainError::infra(InfraErrorKind::DataCorruption, "d")),
        ErrorCode::DataCorruption
    );
    assert_eq!(
        code_of(&DomainError::infra(InfraErrorKind::Other("x".into()), "d")),
        ErrorCode::Internal
    );
}

#[test]
fn app_error_preserves_code_and_detail() {
    use crate::error::AppError;

    let err = DomainError::conflict(ConflictKind::NotPlayerTurn, "player 2 fired out of turn");
    let app: AppError = err.into();
    assert_eq!(app.code(), ErrorCode::NotPlayerTurn);
    assert!(app.to_string().contains("player 2 fired out of turn"));
}
