//! In-memory fleet store keyed by `(battle_id, player_id)`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::battle::{BattleId, PlayerId};
use crate::domain::fleet::Fleet;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::fleets::FleetStore;

#[derive(Default)]
pub struct InMemoryFleetStore {
    fleets: RwLock<BTreeMap<(BattleId, PlayerId), Fleet>>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    async fn get_by_battle_and_player(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<Fleet, DomainError> {
        self.fleets
            .read()
            .get(&(battle_id, player_id))
            .cloned()
            .ok_or_else(|| fleet_not_found(battle_id, player_id))
    }

    async fn get_opponent(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<Fleet, DomainError> {
        self.fleets
            .read()
            .range((battle_id, PlayerId::MIN)..=(battle_id, PlayerId::MAX))
            .map(|(_, fleet)| fleet)
            .find(|fleet| fleet.player_id != player_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Fleet,
                    format!("Battle {battle_id} has no opposing fleet for player {player_id}"),
                )
            })
    }

    async fn get_all_of_battle(&self, battle_id: BattleId) -> Result<Vec<Fleet>, DomainError> {
        Ok(self
            .fleets
            .read()
            .range((battle_id, PlayerId::MIN)..=(battle_id, PlayerId::MAX))
            .map(|(_, fleet)| fleet.clone())
            .collect())
    }

    async fn save(&self, fleet: Fleet) -> Result<Fleet, DomainError> {
        self.fleets
            .write()
            .insert((fleet.battle_id, fleet.player_id), fleet.clone());
        Ok(fleet)
    }

    async fn delete_by_battle(&self, battle_id: BattleId) -> Result<(), DomainError> {
        self.fleets
            .write()
            .retain(|(b, _), _| *b != battle_id);
        Ok(())
    }
}

fn fleet_not_found(battle_id: BattleId, player_id: PlayerId) -> DomainError {
    DomainError::not_found(
        NotFoundKind::Fleet,
        format!("Fleet of player {player_id} in battle {battle_id} not found"),
    )
}
