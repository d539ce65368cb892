//! In-memory battle store with optimistic lock-version checks on save.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::battle::{Battle, BattleId, Phase};
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::battles::{BattleStore, NewBattle};

#[derive(Default)]
pub struct InMemoryBattleStore {
    seq: AtomicI64,
    battles: RwLock<BTreeMap<BattleId, Battle>>,
}

impl InMemoryBattleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BattleStore for InMemoryBattleStore {
    async fn create(&self, new: NewBattle) -> Result<Battle, DomainError> {
        let id = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let battle = Battle {
            id,
            player_a: new.player_a,
            player_b: new.player_b,
            phase: Phase::Deployment,
            turn: new.player_a,
            turn_count: 0,
            created_at: OffsetDateTime::now_utc(),
            started_at: None,
            finished_at: None,
            lock_version: 1,
        };
        self.battles.write().insert(id, battle.clone());
        Ok(battle)
    }

    async fn get_by_id(&self, battle_id: BattleId) -> Result<Battle, DomainError> {
        self.battles
            .read()
            .get(&battle_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Battle, format!("Battle {battle_id} not found"))
            })
    }

    async fn get_all(&self) -> Result<Vec<Battle>, DomainError> {
        Ok(self.battles.read().values().cloned().collect())
    }

    async fn save(&self, battle: Battle) -> Result<Battle, DomainError> {
        let mut battles = self.battles.write();
        let stored = battles.get(&battle.id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Battle, format!("Battle {} not found", battle.id))
        })?;

        // Distinguish NotFound from OptimisticLock the way a rows-affected
        // check would.
        if stored.lock_version != battle.lock_version {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "Battle {} was modified concurrently (expected version {}, actual version {})",
                    battle.id, battle.lock_version, stored.lock_version
                ),
            ));
        }

        let mut updated = battle;
        updated.lock_version += 1;
        battles.insert(updated.id, updated.clone());
        Ok(updated)
    }

    async fn delete_by_id(&self, battle_id: BattleId) -> Result<(), DomainError> {
        // Absent battles make deletion a no-op; delete is idempotent.
        self.battles.write().remove(&battle_id);
        Ok(())
    }
}
