//! In-memory player store with a unique-name constraint.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::battle::PlayerId;
use crate::domain::player::Player;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::players::{NewPlayer, PlayerStore};

#[derive(Default)]
pub struct InMemoryPlayerStore {
    seq: AtomicI64,
    players: RwLock<BTreeMap<PlayerId, Player>>,
}

impl InMemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlayerStore for InMemoryPlayerStore {
    async fn create(&self, new: NewPlayer) -> Result<Player, DomainError> {
        let mut players = self.players.write();
        if players.values().any(|p| p.name == new.name) {
            return Err(DomainError::conflict(
                ConflictKind::UniqueName,
                format!("Player name {:?} is already taken", new.name),
            ));
        }
        let id = self.seq.fetch_add(1, Ordering::Relaxed) + 1;
        let player = Player {
            id,
            name: new.name,
            created_at: OffsetDateTime::now_utc(),
        };
        players.insert(id, player.clone());
        Ok(player)
    }

    async fn get_by_id(&self, player_id: PlayerId) -> Result<Player, DomainError> {
        self.players
            .read()
            .get(&player_id)
            .cloned()
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Player, format!("Player {player_id} not found"))
            })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Player>, DomainError> {
        Ok(self
            .players
            .read()
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Player>, DomainError> {
        Ok(self.players.read().values().cloned().collect())
    }
}
