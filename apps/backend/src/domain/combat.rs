//! Pure shot assessment against an opponent's ships.
//!
//! Turn and phase enforcement live in the combat service; this module only
//! answers "what does a shot at this cell do to these ships".

use serde::{Deserialize, Serialize};

use crate::domain::location::GridLocation;
use crate::domain::ship::{Ship, ShipStatus};

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotResult {
    Missed,
    Hit,
    Sunk,
    AlreadyShot,
}

/// What a resolved shot reports back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotReport {
    pub result: ShotResult,
    /// True when this shot sank the last surviving ship.
    pub victorious: bool,
}

/// Effect of a shot on the opponent's ships, before persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum ShotAssessment {
    /// No ship occupies the cell.
    Missed,
    /// A ship occupies the cell and was already hit there; idempotent, no
    /// mutation.
    AlreadyShot,
    /// A fresh hit. `ship` is the updated value to persist.
    Struck { ship: Ship, sunk: bool },
}

/// Assess a shot at `target` against `ships`.
///
/// At most one ship can occupy a cell (placement forbids overlap), so the
/// first match is the only match.
pub fn assess_shot(ships: &[Ship], target: GridLocation) -> ShotAssessment {
    let Some(ship) = ships.iter().find(|s| s.contains(target)) else {
        return ShotAssessment::Missed;
    };
    if ship.is_hit_at(target) {
        return ShotAssessment::AlreadyShot;
    }
    let ship = ship.with_hit(target);
    let sunk = ship.status() == ShipStatus::Destroyed;
    ShotAssessment::Struck { ship, sunk }
}
