//! Fleet storage port.

use async_trait::async_trait;

use crate::domain::battle::{BattleId, PlayerId};
use crate::domain::fleet::Fleet;
use crate::errors::domain::DomainError;

#[async_trait]
pub trait FleetStore: Send + Sync {
    /// Fails with `NotFoundKind::Fleet` when the pair is unknown.
    async fn get_by_battle_and_player(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<Fleet, DomainError>;

    /// The other fleet of the battle. Fails with `NotFoundKind::Fleet` when
    /// the battle has no fleet belonging to another player.
    async fn get_opponent(
        &self,
        battle_id: BattleId,
        player_id: PlayerId,
    ) -> Result<Fleet, DomainError>;

    async fn get_all_of_battle(&self, battle_id: BattleId) -> Result<Vec<Fleet>, DomainError>;

    /// Insert or replace, keyed by `(battle_id, player_id)`.
    async fn save(&self, fleet: Fleet) -> Result<Fleet, DomainError>;

    /// Remove every fleet of the battle (delete cascade).
    async fn delete_by_battle(&self, battle_id: BattleId) -> Result<(), DomainError>;
}
