//! Reporting views over battles and fleets.
//!
//! The full view exposes everything (admin/reporting); the player view masks
//! the opponent's ship positions, exposing only type and structural status.

use serde::{Deserialize, Serialize};

use crate::domain::battle::{Battle, BattleId, Phase, PlayerId};
use crate::domain::fleet::{Fleet, FleetStatus};
use crate::domain::location::GridLocation;
use crate::domain::ship::{Orientation, Ship, ShipStatus, ShipType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub ship_type: ShipType,
    pub status: ShipStatus,
    /// Absent in a masked view.
    pub origin: Option<GridLocation>,
    pub orientation: Option<Orientation>,
    /// Empty in a masked view.
    pub hits: Vec<GridLocation>,
}

impl ShipView {
    fn full(ship: &Ship) -> Self {
        Self {
            ship_type: ship.ship_type,
            status: ship.status(),
            origin: Some(ship.origin),
            orientation: Some(ship.orientation),
            hits: ship.hits().collect(),
        }
    }

    fn masked(ship: &Ship) -> Self {
        Self {
            ship_type: ship.ship_type,
            status: ship.status(),
            origin: None,
            orientation: None,
            hits: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FleetView {
    pub player_id: PlayerId,
    pub status: FleetStatus,
    pub ships: Vec<ShipView>,
    pub shots_fired: Vec<GridLocation>,
}

impl FleetView {
    pub fn full(fleet: &Fleet, ships: &[Ship]) -> Self {
        Self {
            player_id: fleet.player_id,
            status: fleet.status,
            ships: ships.iter().map(ShipView::full).collect(),
            shots_fired: fleet.shots_fired.clone(),
        }
    }

    pub fn masked(fleet: &Fleet, ships: &[Ship]) -> Self {
        Self {
            player_id: fleet.player_id,
            status: fleet.status,
            ships: ships.iter().map(ShipView::masked).collect(),
            shots_fired: fleet.shots_fired.clone(),
        }
    }
}

/// Complete battle snapshot for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleView {
    pub battle_id: BattleId,
    pub phase: Phase,
    pub turn: PlayerId,
    pub turn_count: u32,
    pub winner: Option<PlayerId>,
    pub fleets: Vec<FleetView>,
}

impl BattleView {
    pub fn new(battle: &Battle, fleets: Vec<FleetView>) -> Self {
        Self {
            battle_id: battle.id,
            phase: battle.phase,
            turn: battle.turn,
            turn_count: battle.turn_count,
            winner: battle.winner(),
            fleets,
        }
    }
}

/// One player's perspective: own fleet in full, opponent masked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerBattleView {
    pub battle_id: BattleId,
    pub phase: Phase,
    pub your_turn: bool,
    pub turn_count: u32,
    pub winner: Option<PlayerId>,
    pub own: FleetView,
    pub opponent: FleetView,
}

impl PlayerBattleView {
    pub fn new(
        battle: &Battle,
        player_id: PlayerId,
        own: FleetView,
        opponent: FleetView,
    ) -> Self {
        Self {
            battle_id: battle.id,
            phase: battle.phase,
            your_turn: battle.turn == player_id,
            turn_count: battle.turn_count,
            winner: battle.winner(),
            own,
            opponent,
        }
    }
}
