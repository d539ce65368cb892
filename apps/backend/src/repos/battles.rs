//! Battle storage port.

use async_trait::async_trait;

use crate::domain::battle::{Battle, BattleId, PlayerId};
use crate::errors::domain::DomainError;

/// Creation payload; the store allocates the id and stamps timestamps.
#[derive(Debug, Clone, Copy)]
pub struct NewBattle {
    pub player_a: PlayerId,
    pub player_b: PlayerId,
}

#[async_trait]
pub trait BattleStore: Send + Sync {
    /// Create a battle in `Deployment` phase with the turn on `player_a`.
    async fn create(&self, new: NewBattle) -> Result<Battle, DomainError>;

    /// Fails with `NotFoundKind::Battle` when the id is unknown.
    async fn get_by_id(&self, battle_id: BattleId) -> Result<Battle, DomainError>;

    async fn get_all(&self) -> Result<Vec<Battle>, DomainError>;

    /// Persist an updated battle.
    ///
    /// The battle's `lock_version` must match the stored one; on mismatch the
    /// save fails with `ConflictKind::OptimisticLock` and nothing is written.
    /// Returns the stored value with the version bumped.
    async fn save(&self, battle: Battle) -> Result<Battle, DomainError>;

    /// Delete the battle record. Fleets and ships are cascaded by the
    /// battle service, not here.
    async fn delete_by_id(&self, battle_id: BattleId) -> Result<(), DomainError>;
}
