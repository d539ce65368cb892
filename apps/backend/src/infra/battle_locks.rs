//! Per-battle mutual exclusion.
//!
//! Shot resolution and deployment are read-modify-write sequences over the
//! same battle/fleet/ship records; two of them in flight on one battle could
//! both read "my turn" and double-apply a turn. Every mutating service call
//! takes the battle's lock first. Distinct battle ids use distinct locks and
//! proceed in parallel.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::battle::BattleId;

#[derive(Default)]
pub struct BattleLocks {
    locks: DashMap<BattleId, Arc<Mutex<()>>>,
}

impl BattleLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for one battle, waiting behind any in-flight
    /// operation on the same battle.
    pub async fn acquire(&self, battle_id: BattleId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(battle_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Drop the lock entry once a battle is deleted. Callers still holding
    /// a guard keep it; new acquisitions get a fresh lock.
    pub fn discard(&self, battle_id: BattleId) {
        self.locks.remove(&battle_id);
    }
}
