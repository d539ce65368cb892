//! Error codes for the Armada engine boundary.
//!
//! This module defines all error codes used throughout the engine.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings a
//! transport layer (REST handler, scenario runner) puts in its responses.

use core::fmt;

use crate::errors::domain::{
    ConflictKind, DomainError, InfraErrorKind, NotFoundKind, ValidationKind,
};

/// Centralized error codes for the Armada engine boundary.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Coordinate outside the 10x10 grid
    OutOfGrid,
    /// Textual location does not match letter+digit form
    LocationFormat,
    /// Ship footprint exceeds the grid
    ShipOutOfGrid,
    /// Ship footprint intersects an already-deployed ship
    ShipOverlap,
    /// A ship of this type is already deployed in the fleet
    ShipAlreadyDeployed,
    /// A battle needs two distinct players
    SamePlayer,
    /// General validation error
    ValidationError,

    // Resource Not Found
    /// Battle not found
    BattleNotFound,
    /// Fleet not found
    FleetNotFound,
    /// Ship not found
    ShipNotFound,
    /// Player not found
    PlayerNotFound,
    /// General not found error
    NotFound,

    // Battle State Conflicts
    /// It is not the firing player's turn
    NotPlayerTurn,
    /// The battle is already finished
    BattleEnded,
    /// Operation not legal in the battle's current phase
    UnexpectedBattlePhase,
    /// Optimistic lock conflict
    OptimisticLock,
    /// Player name already taken
    UniqueName,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Data corruption detected
    DataCorruption,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::OutOfGrid => "OUT_OF_GRID",
            Self::LocationFormat => "LOCATION_FORMAT",
            Self::ShipOutOfGrid => "SHIP_OUT_OF_GRID",
            Self::ShipOverlap => "SHIP_OVERLAP",
            Self::ShipAlreadyDeployed => "SHIP_ALREADY_DEPLOYED",
            Self::SamePlayer => "SAME_PLAYER",
            Self::ValidationError => "VALIDATION_ERROR",

            // Resource Not Found
            Self::BattleNotFound => "BATTLE_NOT_FOUND",
            Self::FleetNotFound => "FLEET_NOT_FOUND",
            Self::ShipNotFound => "SHIP_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            // Battle State Conflicts
            Self::NotPlayerTurn => "NOT_PLAYER_TURN",
            Self::BattleEnded => "BATTLE_ENDED",
            Self::UnexpectedBattlePhase => "UNEXPECTED_BATTLE_PHASE",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::UniqueName => "UNIQUE_NAME",
            Self::Conflict => "CONFLICT",

            // System Errors
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&DomainError> for ErrorCode {
    fn from(err: &DomainError) -> Self {
        match err {
            DomainError::Validation(kind, _) => match kind {
                ValidationKind::OutOfGrid => Self::OutOfGrid,
                ValidationKind::LocationFormat => Self::LocationFormat,
                ValidationKind::ShipOutOfGrid => Self::ShipOutOfGrid,
                ValidationKind::ShipOverlap { .. } => Self::ShipOverlap,
                ValidationKind::ShipAlreadyDeployed => Self::ShipAlreadyDeployed,
                ValidationKind::SamePlayer => Self::SamePlayer,
                _ => Self::ValidationError,
            },
            DomainError::Conflict(kind, _) => match kind {
                ConflictKind::NotPlayerTurn => Self::NotPlayerTurn,
                ConflictKind::BattleEnded => Self::BattleEnded,
                ConflictKind::UnexpectedBattlePhase => Self::UnexpectedBattlePhase,
                ConflictKind::OptimisticLock => Self::OptimisticLock,
                ConflictKind::UniqueName => Self::UniqueName,
                _ => Self::Conflict,
            },
            DomainError::NotFound(kind, _) => match kind {
                NotFoundKind::Battle => Self::BattleNotFound,
                NotFoundKind::Fleet => Self::FleetNotFound,
                NotFoundKind::Ship => Self::ShipNotFound,
                NotFoundKind::Player => Self::PlayerNotFound,
                _ => Self::NotFound,
            },
            DomainError::Infra(kind, _) => match kind {
                InfraErrorKind::DataCorruption => Self::DataCorruption,
                _ => Self::Internal,
            },
        }
    }
}
