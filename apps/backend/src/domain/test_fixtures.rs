//! Test-only fixtures for domain unit tests.

use time::macros::datetime;

use crate::domain::battle::{Battle, BattleId, Phase, PlayerId};
use crate::domain::location::GridLocation;
use crate::domain::ship::{Orientation, Ship, ShipType};

pub fn loc(x: u8, y: u8) -> GridLocation {
    GridLocation::new(x, y).unwrap()
}

pub fn ship(
    battle_id: BattleId,
    player_id: PlayerId,
    ship_type: ShipType,
    x: u8,
    y: u8,
    orientation: Orientation,
) -> Ship {
    Ship::new(battle_id, player_id, ship_type, loc(x, y), orientation)
}

/// A full five-ship fleet stacked on rows 0..=4, one ship per row.
pub fn row_fleet(battle_id: BattleId, player_id: PlayerId) -> Vec<Ship> {
    ShipType::ALL
        .iter()
        .enumerate()
        .map(|(row, &t)| ship(battle_id, player_id, t, 0, row as u8, Orientation::Row))
        .collect()
}

pub fn fighting_battle(id: BattleId, player_a: PlayerId, player_b: PlayerId) -> Battle {
    Battle {
        id,
        player_a,
        player_b,
        phase: Phase::Fighting,
        turn: player_a,
        turn_count: 0,
        created_at: datetime!(2024-05-01 12:00 UTC),
        started_at: Some(datetime!(2024-05-01 12:05 UTC)),
        finished_at: None,
        lock_version: 1,
    }
}
