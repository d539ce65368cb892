//! In-memory ship store keyed by the ship identity triple.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::battle::{BattleId, PlayerId};
use crate::domain::ship::{Ship, ShipType};
use crate::errors::domain::DomainError;
use crate::repos::ships::ShipStore;

#[derive(Default)]
pub struct InMemoryShipStore {
    ships: RwLock<BTreeMap<(BattleId, PlayerId, ShipType), Ship>>,
}

impl InMemoryShipStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShipStore for InMemoryShipStore {
    async fn get_all_in_fleet(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<Vec<Ship>, DomainError> {
        Ok(self
            .ships
            .read()
            .values()
            .filter(|s| s.battle_id == battle_id && s.player_id == player_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
        ship_type: ShipType,
    ) -> Result<Option<Ship>, DomainError> {
        Ok(self
            .ships
            .read()
            .get(&(battle_id, player_id, ship_type))
            .cloned())
    }

    async fn save(&self, ship: Ship) -> Result<Ship, DomainError> {
        self.ships
            .write()
            .insert((ship.battle_id, ship.player_id, ship.ship_type), ship.clone());
        Ok(ship)
    }

    async fn delete_by_battle(&self, battle_id: BattleId) -> Result<(), DomainError> {
        self.ships.write().retain(|(b, _, _), _| *b != battle_id);
        Ok(())
    }
}
