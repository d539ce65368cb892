//! Application state containing shared resources.

use std::sync::Arc;

use crate::adapters::{
    InMemoryBattleStore, InMemoryFleetStore, InMemoryPlayerStore, InMemoryShipStore,
};
use crate::infra::BattleLocks;
use crate::repos::{BattleStore, FleetStore, PlayerStore, ShipStore};

/// Shared handles the services operate on: the four storage ports plus the
/// per-battle lock registry.
pub struct AppState {
    pub battles: Arc<dyn BattleStore>,
    pub fleets: Arc<dyn FleetStore>,
    pub ships: Arc<dyn ShipStore>,
    pub players: Arc<dyn PlayerStore>,
    pub battle_locks: BattleLocks,
}

impl AppState {
    pub fn new(
        battles: Arc<dyn BattleStore>,
        fleets: Arc<dyn FleetStore>,
        ships: Arc<dyn ShipStore>,
        players: Arc<dyn PlayerStore>,
    ) -> Arc<Self> {
        Arc::new(Self {
            battles,
            fleets,
            ships,
            players,
            battle_locks: BattleLocks::new(),
        })
    }

    /// State backed entirely by in-memory stores, for tests and embedders.
    pub fn in_memory() -> Arc<Self> {
        Self::new(
            Arc::new(InMemoryBattleStore::new()),
            Arc::new(InMemoryFleetStore::new()),
            Arc::new(InMemoryShipStore::new()),
            Arc::new(InMemoryPlayerStore::new()),
        )
    }
}
