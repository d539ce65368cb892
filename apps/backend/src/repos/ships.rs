//! Ship storage port.

use async_trait::async_trait;

use crate::domain::battle::{BattleId, PlayerId};
use crate::domain::ship::{Ship, ShipType};
use crate::errors::domain::DomainError;

#[async_trait]
pub trait ShipStore: Send + Sync {
    /// All ships of one fleet, in stable (type) order.
    async fn get_all_in_fleet(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<Vec<Ship>, DomainError>;

    async fn find_by_id(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
        ship_type: ShipType,
    ) -> Result<Option<Ship>, DomainError>;

    /// Insert or replace, keyed by the ship's identity triple.
    async fn save(&self, ship: Ship) -> Result<Ship, DomainError>;

    /// Remove every ship of the battle (delete cascade).
    async fn delete_by_battle(&self, battle_id: BattleId) -> Result<(), DomainError>;
}
