//! Fleets: one player's ships in one battle, with an aggregate status.

use serde::{Deserialize, Serialize};

use crate::domain::battle::{BattleId, PlayerId};
use crate::domain::location::GridLocation;
use crate::domain::rules::FLEET_SIZE;
use crate::domain::ship::{Ship, ShipStatus, ShipType};

/// Deployment/combat status of a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FleetStatus {
    /// Not all ship types are placed yet.
    NotDeployed,
    /// Fully deployed, no hits taken.
    Operational,
    /// At least one hit taken, at least one ship afloat.
    Damaged,
    /// Every ship destroyed.
    Sunk,
}

/// One player's fleet in one battle, keyed by `(battle_id, player_id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    pub battle_id: BattleId,
    pub player_id: PlayerId,
    pub status: FleetStatus,
    /// Every cell this fleet has fired at, in firing order, deduplicated.
    /// Kept for external reporting; resolution never reads it.
    pub shots_fired: Vec<GridLocation>,
}

impl Fleet {
    pub fn new(battle_id: BattleId, player_id: PlayerId) -> Self {
        Self {
            battle_id,
            player_id,
            status: FleetStatus::NotDeployed,
            shots_fired: Vec::new(),
        }
    }

    /// Record a resolved shot in the history. Re-shots of a cell keep the
    /// original entry.
    pub fn record_shot(&mut self, target: GridLocation) {
        if !self.shots_fired.contains(&target) {
            self.shots_fired.push(target);
        }
    }
}

/// True when the ships cover the full fleet complement, one of each type.
pub fn has_full_complement(ships: &[Ship]) -> bool {
    ships.len() == FLEET_SIZE
        && ShipType::ALL
            .iter()
            .all(|t| ships.iter().any(|s| s.ship_type == *t))
}

/// Aggregate fleet status from its ships' structural statuses.
///
/// An incomplete fleet is `NotDeployed`. A complete fleet takes the shared
/// ship status when all ships agree, and `Damaged` otherwise.
pub fn aggregate_status(ships: &[Ship]) -> FleetStatus {
    if !has_full_complement(ships) {
        return FleetStatus::NotDeployed;
    }
    let first = ships[0].status();
    if ships.iter().any(|s| s.status() != first) {
        return FleetStatus::Damaged;
    }
    match first {
        ShipStatus::Unharmed => FleetStatus::Operational,
        ShipStatus::Damaged => FleetStatus::Damaged,
        ShipStatus::Destroyed => FleetStatus::Sunk,
    }
}
